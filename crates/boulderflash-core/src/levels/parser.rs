//! Text map parsing

use glam::IVec2;
use thiserror::Error;

use crate::simulation::Tile;
use crate::world::{GravityZones, Grid};

/// Where the player starts when a map has no `P`
pub const DEFAULT_PLAYER_START: IVec2 = IVec2::new(1, 1);

/// Errors produced while turning a map or a level index into a level
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level map is empty")]
    EmptyMap,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("level is {width}x{height}, the minimum is 3x3")]
    TooSmall { width: usize, height: usize },

    #[error("second player start at {second} (first at {first})")]
    MultiplePlayers { first: IVec2, second: IVec2 },

    #[error("player start {0} lies on the border wall")]
    PlayerOnBorder(IVec2),

    #[error("no level with index {index} ({count} available)")]
    UnknownLevel { index: usize, count: usize },
}

/// Everything a level load hands to the engine and the player
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub grid: Grid,
    pub gravity_zones: GravityZones,
    pub player_start: IVec2,
    /// Keys needed to open the exit, never less than one
    pub required_keys: u32,
}

/// Tile for a level-map character; `P` is handled by the parser
fn level_tile(c: char) -> Option<Tile> {
    match c {
        '#' => Some(Tile::Wall),
        '*' => Some(Tile::Data),
        'F' => Some(Tile::Firewall),
        'K' => Some(Tile::Key),
        'A' => Some(Tile::Predator),
        'B' => Some(Tile::Builder),
        'G' => Some(Tile::GravityZone),
        'X' => Some(Tile::Exit),
        'T' => Some(Tile::Teleporter),
        'S' => Some(Tile::Sludge),
        '.' => Some(Tile::Empty),
        _ => None,
    }
}

/// Parse a level map, one character per cell.
///
/// Leading and trailing blank lines are ignored. Unknown characters become
/// Empty and are reported once each as a warning.
pub fn parse_level(map: &str) -> Result<LevelLayout, LevelError> {
    let lines: Vec<&str> = map
        .trim_matches(|c| c == '\n' || c == '\r')
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .collect();
    if lines.iter().all(|line| line.is_empty()) {
        return Err(LevelError::EmptyMap);
    }

    let width = lines[0].chars().count();
    let height = lines.len();
    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(LevelError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
    }
    if width < 3 || height < 3 {
        return Err(LevelError::TooSmall { width, height });
    }

    let on_border = |pos: IVec2| {
        pos.x == 0 || pos.y == 0 || pos.x == width as i32 - 1 || pos.y == height as i32 - 1
    };

    let mut gravity_zones = GravityZones::new();
    let mut player: Option<IVec2> = None;
    let mut keys = 0u32;
    let mut unknown: Vec<char> = Vec::new();
    let mut rows = Vec::with_capacity(height);

    for (y, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(width);
        for (x, c) in line.chars().enumerate() {
            let pos = IVec2::new(x as i32, y as i32);
            let tile = match c {
                'P' => {
                    if let Some(first) = player {
                        return Err(LevelError::MultiplePlayers { first, second: pos });
                    }
                    player = Some(pos);
                    Tile::Empty
                }
                other => match level_tile(other) {
                    Some(tile) => tile,
                    None => {
                        if !unknown.contains(&other) {
                            unknown.push(other);
                        }
                        Tile::Empty
                    }
                },
            };
            match tile {
                // The border is forced to Wall, so nothing there survives
                Tile::Key if !on_border(pos) => keys += 1,
                Tile::GravityZone if !on_border(pos) => gravity_zones.insert(pos),
                _ => {}
            }
            row.push(tile);
        }
        rows.push(row);
    }

    for c in unknown {
        log::warn!("Unknown level glyph {c:?} treated as empty");
    }

    let player_start = player.unwrap_or(DEFAULT_PLAYER_START);
    if on_border(player_start) {
        return Err(LevelError::PlayerOnBorder(player_start));
    }

    Ok(LevelLayout {
        grid: Grid::from_rows(&rows),
        gravity_zones,
        player_start,
        required_keys: keys.max(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_map() {
        let layout = parse_level("######\n#P*K.#\n#.GFX#\n######").unwrap();

        assert_eq!(layout.grid.width(), 6);
        assert_eq!(layout.grid.height(), 4);
        assert_eq!(layout.player_start, IVec2::new(1, 1));
        assert_eq!(layout.grid.get(1, 1), Tile::Empty);
        assert_eq!(layout.grid.get(2, 1), Tile::Data);
        assert_eq!(layout.grid.get(3, 2), Tile::Firewall);
        assert_eq!(layout.grid.get(4, 2), Tile::Exit);
        assert_eq!(layout.required_keys, 1);
        assert!(layout.gravity_zones.contains(IVec2::new(2, 2)));
        assert_eq!(layout.gravity_zones.len(), 1);
    }

    #[test]
    fn test_required_keys_counts_keys() {
        let layout = parse_level("#####\n#PKK#\n#K.X#\n#####").unwrap();
        assert_eq!(layout.required_keys, 3);
    }

    #[test]
    fn test_required_keys_at_least_one() {
        let layout = parse_level("####\n#PX#\n####").unwrap();
        assert_eq!(layout.required_keys, 1);
    }

    #[test]
    fn test_missing_player_defaults() {
        let layout = parse_level("####\n#..#\n#..#\n####").unwrap();
        assert_eq!(layout.player_start, DEFAULT_PLAYER_START);
    }

    #[test]
    fn test_unknown_glyph_becomes_empty() {
        let layout = parse_level("#####\n#P?o#\n#####").unwrap();
        assert_eq!(layout.grid.get(2, 1), Tile::Empty);
        assert_eq!(layout.grid.get(3, 1), Tile::Empty);
    }

    #[test]
    fn test_border_is_forced_to_wall() {
        let layout = parse_level("*...\n.P.*\n....").unwrap();
        assert_eq!(layout.grid.get(0, 0), Tile::Wall);
        assert_eq!(layout.grid.get(3, 1), Tile::Wall);
        assert_eq!(layout.grid.get(2, 1), Tile::Empty);
    }

    #[test]
    fn test_border_zone_not_registered() {
        let layout = parse_level("#G##\n#PG#\n####").unwrap();
        assert_eq!(layout.gravity_zones.len(), 1);
        assert!(layout.gravity_zones.contains(IVec2::new(2, 1)));
    }

    #[test]
    fn test_blank_lines_around_map_ignored() {
        let layout = parse_level("\n\n###\n#P#\n###\n\n").unwrap();
        assert_eq!(layout.grid.height(), 3);
    }

    #[test]
    fn test_crlf_line_endings() {
        let layout = parse_level("####\r\n#PX#\r\n####\r\n").unwrap();
        assert_eq!(layout.grid.width(), 4);
        assert_eq!(layout.grid.get(2, 1), Tile::Exit);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_level("").unwrap_err(), LevelError::EmptyMap);
        assert_eq!(parse_level("\n\n").unwrap_err(), LevelError::EmptyMap);
        assert_eq!(
            parse_level("####\n#P#\n####").unwrap_err(),
            LevelError::RaggedRow {
                row: 1,
                expected: 4,
                found: 3
            }
        );
        assert_eq!(
            parse_level("##\n##").unwrap_err(),
            LevelError::TooSmall {
                width: 2,
                height: 2
            }
        );
        assert_eq!(
            parse_level("#####\n#P.P#\n#####").unwrap_err(),
            LevelError::MultiplePlayers {
                first: IVec2::new(1, 1),
                second: IVec2::new(3, 1)
            }
        );
        assert_eq!(
            parse_level("#P#\n#.#\n###").unwrap_err(),
            LevelError::PlayerOnBorder(IVec2::new(1, 0))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = LevelError::UnknownLevel { index: 7, count: 5 };
        assert_eq!(err.to_string(), "no level with index 7 (5 available)");
    }
}

//! Built-in level maps

/// (name, description, map) in play order
pub const BUILTIN_LEVELS: [(&str, &str, &str); 5] = [
    ("Boot Sector", "Dig through the data, grab the key, reach the exit", BOOT_SECTOR),
    ("Gravity Well", "Firewalls above a gravity zone fall upwards", GRAVITY_WELL),
    ("Hunter Protocol", "Predators hunt you down the corridors", HUNTER_PROTOCOL),
    ("Construction Crew", "Builders refill the tunnels, teleporters help", CONSTRUCTION_CREW),
    ("Corruption", "Sludge spreads; bombs and pillars buy time", CORRUPTION),
];

const BOOT_SECTOR: &str = "\
####################\n\
#P****.*****F****..#\n\
#*****.**F**.*****.#\n\
#**F**....******K*.#\n\
#*****.**F***.*****#\n\
#*.....*****.*..***#\n\
#***K***F*****.**.*#\n\
#****.****.****F**.#\n\
#**F*****.***.****.#\n\
#*****.*****.****.X#\n\
####################";

const GRAVITY_WELL: &str = "\
####################\n\
#P**.....F....*****#\n\
#***.*****..*.**K**#\n\
#***.**F**..*.*****#\n\
#*...*****..*......#\n\
#***.**.**.G*.**F**#\n\
#**K.**.**..*.**.**#\n\
#***.**.**..*.**G**#\n\
#***.**F**..*.*****#\n\
#***........*.....X#\n\
####################";

const HUNTER_PROTOCOL: &str = "\
####################\n\
#P*****....***.....#\n\
#*****.*.*.***.*A*.#\n\
#***K*.*...***.***.#\n\
#*****.*****......*#\n\
#......F.....*****.#\n\
#.****.*****.***K*.#\n\
#.*A**.*...*.*****.#\n\
#.****.*.*.*.......#\n\
#......*.*.......X.#\n\
####################";

const CONSTRUCTION_CREW: &str = "\
####################\n\
#P**.....B.....**T.#\n\
#**.*****.*****.**.#\n\
#**.*F***.**K**.**.#\n\
#**.*****.*****.**.#\n\
#T*........B.......#\n\
#**.**.*****.****..#\n\
#**.**.**K**.**F*..#\n\
#**.**.*****.****..#\n\
#**.....B........X.#\n\
####################";

const CORRUPTION: &str = "\
####################\n\
#P***.*****.*****K.#\n\
#****.*****.*****..#\n\
#****.**S**.***F*..#\n\
#K...........*****.#\n\
#****.**F**.*****..#\n\
#****.*****.**S**..#\n\
#**F*.*****.*****..#\n\
#****.......****A..#\n\
#****.*****.*****.X#\n\
####################";

/// The PGP word list: column 0 holds the two-syllable word used at even
/// positions, column 1 the three-syllable word used at odd positions.
pub(crate) const PGP_WORDS: [[&str; 2]; 256] = [
    ["aardvark", "adroitness"], // 0x00
    ["absurd", "adviser"], // 0x01
    ["accrue", "aftermath"], // 0x02
    ["acme", "aggregate"], // 0x03
    ["adrift", "alkali"], // 0x04
    ["adult", "almighty"], // 0x05
    ["afflict", "amulet"], // 0x06
    ["ahead", "amusement"], // 0x07
    ["aimless", "antenna"], // 0x08
    ["Algol", "applicant"], // 0x09
    ["allow", "Apollo"], // 0x0A
    ["alone", "armistice"], // 0x0B
    ["ammo", "article"], // 0x0C
    ["ancient", "asteroid"], // 0x0D
    ["apple", "Atlantic"], // 0x0E
    ["artist", "atmosphere"], // 0x0F
    ["assume", "autopsy"], // 0x10
    ["Athens", "Babylon"], // 0x11
    ["atlas", "backwater"], // 0x12
    ["Aztec", "barbecue"], // 0x13
    ["baboon", "belowground"], // 0x14
    ["backfield", "bifocals"], // 0x15
    ["backward", "bodyguard"], // 0x16
    ["banjo", "bookseller"], // 0x17
    ["beaming", "borderline"], // 0x18
    ["bedlamp", "bottomless"], // 0x19
    ["beehive", "Bradbury"], // 0x1A
    ["beeswax", "bravado"], // 0x1B
    ["befriend", "Brazilian"], // 0x1C
    ["Belfast", "breakaway"], // 0x1D
    ["berserk", "Burlington"], // 0x1E
    ["billiard", "businessman"], // 0x1F
    ["bison", "butterfat"], // 0x20
    ["blackjack", "Camelot"], // 0x21
    ["blockade", "candidate"], // 0x22
    ["blowtorch", "cannonball"], // 0x23
    ["bluebird", "Capricorn"], // 0x24
    ["bombast", "caravan"], // 0x25
    ["bookshelf", "caretaker"], // 0x26
    ["brackish", "celebrate"], // 0x27
    ["breadline", "cellulose"], // 0x28
    ["breakup", "certify"], // 0x29
    ["brickyard", "chambermaid"], // 0x2A
    ["briefcase", "Cherokee"], // 0x2B
    ["Burbank", "Chicago"], // 0x2C
    ["button", "clergyman"], // 0x2D
    ["buzzard", "coherence"], // 0x2E
    ["cement", "combustion"], // 0x2F
    ["chairlift", "commando"], // 0x30
    ["chatter", "company"], // 0x31
    ["checkup", "component"], // 0x32
    ["chisel", "concurrent"], // 0x33
    ["choking", "confidence"], // 0x34
    ["chopper", "conformist"], // 0x35
    ["Christmas", "congregate"], // 0x36
    ["clamshell", "consensus"], // 0x37
    ["classic", "consulting"], // 0x38
    ["classroom", "corporate"], // 0x39
    ["cleanup", "corrosion"], // 0x3A
    ["clockwork", "councilman"], // 0x3B
    ["cobra", "crossover"], // 0x3C
    ["commence", "crucifix"], // 0x3D
    ["concert", "cumbersome"], // 0x3E
    ["cowbell", "customer"], // 0x3F
    ["crackdown", "Dakota"], // 0x40
    ["cranky", "decadence"], // 0x41
    ["crowfoot", "December"], // 0x42
    ["crucial", "decimal"], // 0x43
    ["crumpled", "designing"], // 0x44
    ["crusade", "detector"], // 0x45
    ["cubic", "detergent"], // 0x46
    ["dashboard", "determine"], // 0x47
    ["deadbolt", "dictator"], // 0x48
    ["deckhand", "dinosaur"], // 0x49
    ["dogsled", "direction"], // 0x4A
    ["dragnet", "disable"], // 0x4B
    ["drainage", "disbelief"], // 0x4C
    ["dreadful", "disruptive"], // 0x4D
    ["drifter", "distortion"], // 0x4E
    ["dropper", "document"], // 0x4F
    ["drumbeat", "embezzle"], // 0x50
    ["drunken", "enchanting"], // 0x51
    ["Dupont", "enrollment"], // 0x52
    ["dwelling", "enterprise"], // 0x53
    ["eating", "equation"], // 0x54
    ["edict", "equipment"], // 0x55
    ["egghead", "escapade"], // 0x56
    ["eightball", "Eskimo"], // 0x57
    ["endorse", "everyday"], // 0x58
    ["endow", "examine"], // 0x59
    ["enlist", "existence"], // 0x5A
    ["erase", "exodus"], // 0x5B
    ["escape", "fascinate"], // 0x5C
    ["exceed", "filament"], // 0x5D
    ["eyeglass", "finicky"], // 0x5E
    ["eyetooth", "forever"], // 0x5F
    ["facial", "fortitude"], // 0x60
    ["fallout", "frequency"], // 0x61
    ["flagpole", "gadgetry"], // 0x62
    ["flatfoot", "Galveston"], // 0x63
    ["flytrap", "getaway"], // 0x64
    ["fracture", "glossary"], // 0x65
    ["framework", "gossamer"], // 0x66
    ["freedom", "graduate"], // 0x67
    ["frighten", "gravity"], // 0x68
    ["gazelle", "guitarist"], // 0x69
    ["Geiger", "hamburger"], // 0x6A
    ["glitter", "Hamilton"], // 0x6B
    ["glucose", "handiwork"], // 0x6C
    ["goggles", "hazardous"], // 0x6D
    ["goldfish", "headwaters"], // 0x6E
    ["gremlin", "hemisphere"], // 0x6F
    ["guidance", "hesitate"], // 0x70
    ["hamlet", "hideaway"], // 0x71
    ["highchair", "holiness"], // 0x72
    ["hockey", "hurricane"], // 0x73
    ["indoors", "hydraulic"], // 0x74
    ["indulge", "impartial"], // 0x75
    ["inverse", "impetus"], // 0x76
    ["involve", "inception"], // 0x77
    ["island", "indigo"], // 0x78
    ["jawbone", "inertia"], // 0x79
    ["keyboard", "infancy"], // 0x7A
    ["kickoff", "inferno"], // 0x7B
    ["kiwi", "informant"], // 0x7C
    ["klaxon", "insincere"], // 0x7D
    ["locale", "insurgent"], // 0x7E
    ["lockup", "integrate"], // 0x7F
    ["merit", "intention"], // 0x80
    ["minnow", "inventive"], // 0x81
    ["miser", "Istanbul"], // 0x82
    ["Mohawk", "Jamaica"], // 0x83
    ["mural", "Jupiter"], // 0x84
    ["music", "leprosy"], // 0x85
    ["necklace", "letterhead"], // 0x86
    ["Neptune", "liberty"], // 0x87
    ["newborn", "maritime"], // 0x88
    ["nightbird", "matchmaker"], // 0x89
    ["Oakland", "maverick"], // 0x8A
    ["obtuse", "Medusa"], // 0x8B
    ["offload", "megaton"], // 0x8C
    ["optic", "microscope"], // 0x8D
    ["orca", "microwave"], // 0x8E
    ["payday", "midsummer"], // 0x8F
    ["peachy", "millionaire"], // 0x90
    ["pheasant", "miracle"], // 0x91
    ["physique", "misnomer"], // 0x92
    ["playhouse", "molasses"], // 0x93
    ["Pluto", "molecule"], // 0x94
    ["preclude", "Montana"], // 0x95
    ["prefer", "monument"], // 0x96
    ["preshrunk", "mosquito"], // 0x97
    ["printer", "narrative"], // 0x98
    ["prowler", "nebula"], // 0x99
    ["pupil", "newsletter"], // 0x9A
    ["puppy", "Norwegian"], // 0x9B
    ["python", "October"], // 0x9C
    ["quadrant", "Ohio"], // 0x9D
    ["quiver", "onlooker"], // 0x9E
    ["quota", "opulent"], // 0x9F
    ["ragtime", "Orlando"], // 0xA0
    ["ratchet", "outfielder"], // 0xA1
    ["rebirth", "Pacific"], // 0xA2
    ["reform", "pandemic"], // 0xA3
    ["regain", "Pandora"], // 0xA4
    ["reindeer", "paperweight"], // 0xA5
    ["rematch", "paragon"], // 0xA6
    ["repay", "paragraph"], // 0xA7
    ["retouch", "paramount"], // 0xA8
    ["revenge", "passenger"], // 0xA9
    ["reward", "pedigree"], // 0xAA
    ["rhythm", "Pegasus"], // 0xAB
    ["ribcage", "penetrate"], // 0xAC
    ["ringbolt", "perceptive"], // 0xAD
    ["robust", "performance"], // 0xAE
    ["rocker", "pharmacy"], // 0xAF
    ["ruffled", "phonetic"], // 0xB0
    ["sailboat", "photograph"], // 0xB1
    ["sawdust", "pioneering"], // 0xB2
    ["scallion", "piracy"], // 0xB3
    ["scenic", "pleasure"], // 0xB4
    ["scorecard", "politeness"], // 0xB5
    ["Scotland", "positive"], // 0xB6
    ["seabird", "potato"], // 0xB7
    ["select", "processor"], // 0xB8
    ["sentence", "provincial"], // 0xB9
    ["shadow", "proximate"], // 0xBA
    ["shamrock", "puberty"], // 0xBB
    ["showgirl", "publisher"], // 0xBC
    ["skullcap", "pyramid"], // 0xBD
    ["skydive", "quantity"], // 0xBE
    ["slingshot", "racketeer"], // 0xBF
    ["slowdown", "rebellion"], // 0xC0
    ["snapline", "recipe"], // 0xC1
    ["snapshot", "recover"], // 0xC2
    ["snowcap", "repellent"], // 0xC3
    ["snowslide", "replica"], // 0xC4
    ["solo", "reproduce"], // 0xC5
    ["southward", "resistor"], // 0xC6
    ["soybean", "responsive"], // 0xC7
    ["spaniel", "retraction"], // 0xC8
    ["spearhead", "retrieval"], // 0xC9
    ["spellbind", "retrospect"], // 0xCA
    ["spheroid", "revenue"], // 0xCB
    ["spigot", "revival"], // 0xCC
    ["spindle", "revolver"], // 0xCD
    ["spyglass", "sandalwood"], // 0xCE
    ["stagehand", "sardonic"], // 0xCF
    ["stagnate", "Saturday"], // 0xD0
    ["stairway", "savagery"], // 0xD1
    ["standard", "scavenger"], // 0xD2
    ["stapler", "sensation"], // 0xD3
    ["steamship", "sociable"], // 0xD4
    ["sterling", "souvenir"], // 0xD5
    ["stockman", "specialist"], // 0xD6
    ["stopwatch", "speculate"], // 0xD7
    ["stormy", "stethoscope"], // 0xD8
    ["sugar", "stupendous"], // 0xD9
    ["surmount", "supportive"], // 0xDA
    ["suspense", "surrender"], // 0xDB
    ["sweatband", "suspicious"], // 0xDC
    ["swelter", "sympathy"], // 0xDD
    ["tactics", "tambourine"], // 0xDE
    ["talon", "telephone"], // 0xDF
    ["tapeworm", "therapist"], // 0xE0
    ["tempest", "tobacco"], // 0xE1
    ["tiger", "tolerance"], // 0xE2
    ["tissue", "tomorrow"], // 0xE3
    ["tonic", "torpedo"], // 0xE4
    ["topmost", "tradition"], // 0xE5
    ["tracker", "travesty"], // 0xE6
    ["transit", "trombonist"], // 0xE7
    ["trauma", "truncated"], // 0xE8
    ["treadmill", "typewriter"], // 0xE9
    ["Trojan", "ultimate"], // 0xEA
    ["trouble", "undaunted"], // 0xEB
    ["tumor", "underfoot"], // 0xEC
    ["tunnel", "unicorn"], // 0xED
    ["tycoon", "unify"], // 0xEE
    ["uncut", "universe"], // 0xEF
    ["unearth", "unravel"], // 0xF0
    ["unwind", "upcoming"], // 0xF1
    ["uproot", "vacancy"], // 0xF2
    ["upset", "vagabond"], // 0xF3
    ["upshot", "vertigo"], // 0xF4
    ["vapor", "Virginia"], // 0xF5
    ["village", "visitor"], // 0xF6
    ["virus", "vocalist"], // 0xF7
    ["Vulcan", "voyager"], // 0xF8
    ["waffle", "warranty"], // 0xF9
    ["wallet", "Waterloo"], // 0xFA
    ["watchword", "whimsical"], // 0xFB
    ["wayside", "Wichita"], // 0xFC
    ["willow", "Wilmington"], // 0xFD
    ["woodlark", "Wyoming"], // 0xFE
    ["Zulu", "yesteryear"], // 0xFF
];

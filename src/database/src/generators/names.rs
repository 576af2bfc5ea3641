pub(crate) const FIRST_NAMES: &[&str] = &[
    "Adam", "Bruno", "Carlos", "Dario", "Emil", "Felix", "Goran", "Hugo", "Ivan", "Jonas",
    "Kai", "Luca", "Marco", "Nils", "Oscar", "Pavel", "Rafael", "Samir", "Tomas", "Viktor",
    "Yusuf", "Zoran", "Anders", "Bastian", "Cesar", "Diego", "Enzo", "Filip", "Jakub", "Mateo",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Almeida", "Berger", "Costa", "Duarte", "Eriksen", "Ferreira", "Galli", "Horvat", "Ivanov",
    "Jansen", "Kovac", "Larsen", "Moreau", "Novak", "Olsen", "Petrov", "Quint", "Rossi",
    "Silva", "Tanaka", "Urban", "Vidal", "Weber", "Ximenes", "Yilmaz", "Zeller", "Brandt",
    "Castro", "Dumont", "Fischer",
];

pub(crate) const CITIES: &[&str] = &[
    "Ashford", "Bramley", "Carrow", "Dunmore", "Elston", "Fairhaven", "Glenrock", "Harwick",
    "Ironbridge", "Kingsmoor", "Larkhill", "Milford", "Northwall", "Oakridge", "Portree",
    "Redcliff", "Stonebury", "Thornfield", "Upton", "Westmere",
];

pub(crate) const CLUB_SUFFIXES: &[&str] = &[
    "United", "City", "Rovers", "Athletic", "Wanderers", "Albion", "Town", "FC",
];

//! Fixed prose content for the static branches.
//!
//! All text here is display copy carried from the project write-up; the
//! views emit it verbatim.

pub const PROJECT_TITLE: &str =
    "Utilizing AI/ML and Satellite Imagery to Increase Water Efficiency for Rice Farming";

pub const BACKGROUND: &str = "According to World Bank Group, The Philippines is one of the most \
natural hazard-prone countries in the world. The social and economic cost of natural disasters \
in the country is increasing due to population growth, change in land-use patterns, migration, \
unplanned urbanization, environmental degradation, and global climate change. Agriculture, \
specifically rice farms which are one of the most important crops in the Philippines are no \
exception to climate change such as drought that could lead to wide food insecurity for the \
next decades.";

pub const PROBLEM: &str = "The goal of the project is to build an open-source AI-driven \
interactive map that predicts the required water for a rice farm. The tool will be a low-cost \
alternative for expensive sensors to aid rice farmers to consume water irrigation efficiently. \
Having the tool available to rice farmers and other related stakeholders will help them save an \
irrigation cost and adapt to the impacts of climate change.";

pub const ET_INTRO: &str = "Evapotranspiration (ET) is a combination of the water evaporated \
from the soil surface and transpired through the plant. ET can be measured using evaporation \
pans and atmometers or calculated using climate data.";

pub const ET_NOMENCLATURE: [&str; 3] = [
    "ETo - ET calculated using grass as the reference crop",
    "ETr - ET calculated using alfalfa as the reference crop",
    "ETp - ET measured from a pan or atmometer",
];

pub const ET_COEFFICIENT_NOTE: &str = "Once the reference ET has been determined, a crop \
coefficient must be applied to adjust the reference ET value for local conditions and the type \
of crop being irrigated.";

pub const ETO_ABOUT: &str =
    "ETo represents the evapotranspiration rate from a reference surface, not short of water.";

pub const ETO_FORMULA: &str = "ETo = p (0.46 T mean + 8)";

pub const ETO_P_VALUES: [&str; 2] = ["Latitude: 15° North", "Month: (Given Month)"];

pub const ETO_REFERENCES: [&str; 1] = ["https://www.fao.org/3/s2022e/s2022e07.htm"];

pub const ETCROP_ABOUT: &str = "The crop water need (ET crop) is defined as the depth (or \
amount) of water needed to meet the water loss through evapotranspiration. In other words, it \
is the amount of water needed by the various crops to grow optimally.";

pub const ETCROP_COEFFICIENT: &str = "The crop's water use can be determined by multiplying the \
reference ETo by a crop coefficient (Kc). The crop coefficient adjusts the calculated reference \
ETo to obtain the crop evapotranspiration ETcrop. Different crops will have a different crop \
coefficient and resulting water use.";

pub const ETCROP_FORMULA: &str = "ETcrop = ETo x Kc";

pub const ETCROP_FORMULA_TERMS: [&str; 2] = [
    "ETo = calculated reference ET for grass (mm)",
    "Kc = crop coefficient or ratio of the actual crop evapotranspiration to its potential evapotranspiration",
];

pub const ETCROP_REFERENCES: [&str; 4] = [
    "http://irrigationtoolbox.com/ReferenceDocuments/Extension/BCExtension/577100-5.pdf",
    "https://www.fao.org/3/s2022e/s2022e07.htm",
    "https://www.fao.org/3/s2022e/s2022e08.htm",
    "https://www.fao.org/3/x0490e/x0490e06.htm",
];

pub const IN_FORMULA: &str = "IN = ETcrop - Pe";

pub const IN_FORMULA_TERMS: [&str; 3] = [
    "IN = Irrigation Needs",
    "ETcrop = amount of water needed",
    "Pe = effective rainfall",
];

pub const IN_RICE_FORMULA: &str = "INrice = ETcrop + SAT + PERC + WL - Pe";

pub const IN_RICE_FORMULA_TERMS: [&str; 6] = [
    "INrice = Irrigation Needs Rice",
    "ETcrop = amount of water needed",
    "SAT = water needed to saturate soil for land preparation by puddling",
    "PERC = percolation and seepage losses",
    "WL = amount needed to establish water layer",
    "Pe = effective rainfall",
];

pub const IN_REFERENCES: [&str; 1] =
    ["https://www.fao.org/3/s2022e/s2022e08.htm#4.4%20irrigation%20water%20need%20of%20rice"];

pub const MODELLING_OVERVIEW: [(&str, &str); 4] = [
    (
        "Overall Process",
        "Each temperature variable is forecast with a Prophet model trained upstream on the \
         monthly aggregated series. The exported artifacts are loaded here read-only and \
         rendered with their prediction intervals.",
    ),
    (
        "Daily",
        "Daily series are too noisy for stable seasonal decomposition at this station; daily \
         models are evaluated upstream but not exported.",
    ),
    (
        "Weekly",
        "Weekly aggregation smooths station gaps; weekly models are evaluated upstream but not \
         exported.",
    ),
    (
        "Monthly",
        "Monthly aggregation gives the most stable seasonality and is the exported model set \
         shown below.",
    ),
];

pub const PROJECT_LINK: &str = "https://omdena.com/omdena-chapter-page-philippines/";

pub const PROJECT_MANAGER: (&str, &str) = (
    "Jester Carlos",
    "https://www.linkedin.com/in/jester-carlos-3410831a7/",
);

/// Collaborator roster; an empty URL means no public profile.
pub const COLLABORATORS: [(&str, &str); 10] = [
    ("Amee Ayco", "https://www.linkedin.com/in/ameeayco/"),
    ("Drew Maderazo", "https://www.linkedin.com/in/drumad/"),
    ("Gienel Manarang", "https://www.linkedin.com/in/gienel/"),
    ("Jerome Israel Endaya", "https://www.linkedin.com/in/jerome-endaya-0928a6111/"),
    ("John Russel", ""),
    ("Joma Minoza", "https://www.linkedin.com/in/jomaminoza/"),
    ("Nilleth Pontino", "https://www.linkedin.com/in/nilleth-pontino-aba95a99/"),
    ("Rhey Ann Magcalas", "https://www.linkedin.com/in/rhey-ann-magcalas-47541490/"),
    ("Sai Phani Parsa", "https://www.linkedin.com/in/saiphaniparsa/"),
    ("Zyndly Kent", "https://www.linkedin.com/in/zyndlyy/"),
];

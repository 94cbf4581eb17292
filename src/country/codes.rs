//! ISO 3166-1 country table with the name variants used by the UN, the World
//! Bank and the UNESCO Institute for Statistics.

pub(super) struct Country {
    pub iso3: &'static str,
    pub numeric: Option<u16>,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

const fn c(
    iso3: &'static str,
    numeric: u16,
    name: &'static str,
    aliases: &'static [&'static str],
) -> Country {
    Country {
        iso3,
        numeric: Some(numeric),
        name,
        aliases,
    }
}

pub(super) static COUNTRIES: &[Country] = &[
    c("ABW", 533, "Aruba", &[]),
    c("AFG", 4, "Afghanistan", &[]),
    c("AGO", 24, "Angola", &[]),
    c("AIA", 660, "Anguilla", &[]),
    c("ALA", 248, "Åland Islands", &[]),
    c("ALB", 8, "Albania", &[]),
    c("AND", 20, "Andorra", &[]),
    c("ARE", 784, "United Arab Emirates", &["UAE"]),
    c("ARG", 32, "Argentina", &[]),
    c("ARM", 51, "Armenia", &[]),
    c("ASM", 16, "American Samoa", &[]),
    c("ATA", 10, "Antarctica", &[]),
    c("ATF", 260, "French Southern Territories", &[]),
    c("ATG", 28, "Antigua and Barbuda", &[]),
    c("AUS", 36, "Australia", &[]),
    c("AUT", 40, "Austria", &[]),
    c("AZE", 31, "Azerbaijan", &[]),
    c("BDI", 108, "Burundi", &[]),
    c("BEL", 56, "Belgium", &[]),
    c("BEN", 204, "Benin", &[]),
    c("BES", 535, "Bonaire, Sint Eustatius and Saba", &["Bonaire"]),
    c("BFA", 854, "Burkina Faso", &[]),
    c("BGD", 50, "Bangladesh", &[]),
    c("BGR", 100, "Bulgaria", &[]),
    c("BHR", 48, "Bahrain", &[]),
    c("BHS", 44, "Bahamas", &["Bahamas, The", "The Bahamas"]),
    c("BIH", 70, "Bosnia and Herzegovina", &[]),
    c("BLM", 652, "Saint Barthélemy", &["St. Barthelemy"]),
    c("BLR", 112, "Belarus", &[]),
    c("BLZ", 84, "Belize", &[]),
    c("BMU", 60, "Bermuda", &[]),
    c("BOL", 68, "Bolivia (Plurinational State of)", &["Bolivia"]),
    c("BRA", 76, "Brazil", &[]),
    c("BRB", 52, "Barbados", &[]),
    c("BRN", 96, "Brunei Darussalam", &["Brunei"]),
    c("BTN", 64, "Bhutan", &[]),
    c("BVT", 74, "Bouvet Island", &[]),
    c("BWA", 72, "Botswana", &[]),
    c("CAF", 140, "Central African Republic", &[]),
    c("CAN", 124, "Canada", &[]),
    c("CCK", 166, "Cocos (Keeling) Islands", &["Cocos Islands"]),
    c("CHE", 756, "Switzerland", &[]),
    c("CHL", 152, "Chile", &[]),
    c("CHN", 156, "China", &["People's Republic of China"]),
    c("CIV", 384, "Côte d'Ivoire", &["Ivory Coast"]),
    c("CMR", 120, "Cameroon", &[]),
    c(
        "COD",
        180,
        "Democratic Republic of the Congo",
        &[
            "Congo, Dem. Rep.",
            "DR Congo",
            "Congo (Democratic Republic of the)",
            "Congo, The Democratic Republic of the",
        ],
    ),
    c("COG", 178, "Congo", &["Congo, Rep.", "Republic of the Congo"]),
    c("COK", 184, "Cook Islands", &[]),
    c("COL", 170, "Colombia", &[]),
    c("COM", 174, "Comoros", &[]),
    c("CPV", 132, "Cabo Verde", &["Cape Verde"]),
    c("CRI", 188, "Costa Rica", &[]),
    c("CUB", 192, "Cuba", &[]),
    c("CUW", 531, "Curaçao", &[]),
    c("CXR", 162, "Christmas Island", &[]),
    c("CYM", 136, "Cayman Islands", &[]),
    c("CYP", 196, "Cyprus", &[]),
    c("CZE", 203, "Czechia", &["Czech Republic"]),
    c("DEU", 276, "Germany", &[]),
    c("DJI", 262, "Djibouti", &[]),
    c("DMA", 212, "Dominica", &[]),
    c("DNK", 208, "Denmark", &[]),
    c("DOM", 214, "Dominican Republic", &[]),
    c("DZA", 12, "Algeria", &[]),
    c("ECU", 218, "Ecuador", &[]),
    c("EGY", 818, "Egypt", &["Egypt, Arab Rep."]),
    c("ERI", 232, "Eritrea", &[]),
    c("ESH", 732, "Western Sahara", &[]),
    c("ESP", 724, "Spain", &[]),
    c("EST", 233, "Estonia", &[]),
    c("ETH", 231, "Ethiopia", &[]),
    c("FIN", 246, "Finland", &[]),
    c("FJI", 242, "Fiji", &[]),
    c("FLK", 238, "Falkland Islands (Malvinas)", &["Falkland Islands"]),
    c("FRA", 250, "France", &[]),
    c("FRO", 234, "Faroe Islands", &["Faeroe Islands"]),
    c("FSM", 583, "Micronesia (Federated States of)", &["Micronesia, Fed. Sts.", "Micronesia"]),
    c("GAB", 266, "Gabon", &[]),
    c(
        "GBR",
        826,
        "United Kingdom",
        &["United Kingdom of Great Britain and Northern Ireland", "UK", "Great Britain"],
    ),
    c("GEO", 268, "Georgia", &[]),
    c("GGY", 831, "Guernsey", &[]),
    c("GHA", 288, "Ghana", &[]),
    c("GIB", 292, "Gibraltar", &[]),
    c("GIN", 324, "Guinea", &[]),
    c("GLP", 312, "Guadeloupe", &[]),
    c("GMB", 270, "Gambia", &["Gambia, The", "The Gambia"]),
    c("GNB", 624, "Guinea-Bissau", &[]),
    c("GNQ", 226, "Equatorial Guinea", &[]),
    c("GRC", 300, "Greece", &[]),
    c("GRD", 308, "Grenada", &[]),
    c("GRL", 304, "Greenland", &[]),
    c("GTM", 320, "Guatemala", &[]),
    c("GUF", 254, "French Guiana", &[]),
    c("GUM", 316, "Guam", &[]),
    c("GUY", 328, "Guyana", &[]),
    c(
        "HKG",
        344,
        "Hong Kong",
        &[
            "Hong Kong SAR, China",
            "China, Hong Kong Special Administrative Region",
            "China, Hong Kong SAR",
        ],
    ),
    c("HMD", 334, "Heard Island and McDonald Islands", &[]),
    c("HND", 340, "Honduras", &[]),
    c("HRV", 191, "Croatia", &[]),
    c("HTI", 332, "Haiti", &[]),
    c("HUN", 348, "Hungary", &[]),
    c("IDN", 360, "Indonesia", &[]),
    c("IMN", 833, "Isle of Man", &[]),
    c("IND", 356, "India", &[]),
    c("IOT", 86, "British Indian Ocean Territory", &[]),
    c("IRL", 372, "Ireland", &[]),
    c("IRN", 364, "Iran (Islamic Republic of)", &["Iran", "Iran, Islamic Rep."]),
    c("IRQ", 368, "Iraq", &[]),
    c("ISL", 352, "Iceland", &[]),
    c("ISR", 376, "Israel", &[]),
    c("ITA", 380, "Italy", &[]),
    c("JAM", 388, "Jamaica", &[]),
    c("JEY", 832, "Jersey", &[]),
    c("JOR", 400, "Jordan", &[]),
    c("JPN", 392, "Japan", &[]),
    c("KAZ", 398, "Kazakhstan", &[]),
    c("KEN", 404, "Kenya", &[]),
    c("KGZ", 417, "Kyrgyzstan", &["Kyrgyz Republic"]),
    c("KHM", 116, "Cambodia", &[]),
    c("KIR", 296, "Kiribati", &[]),
    c("KNA", 659, "Saint Kitts and Nevis", &["St. Kitts and Nevis"]),
    c("KOR", 410, "Republic of Korea", &["Korea, Rep.", "South Korea", "Korea, Republic of"]),
    c("KWT", 414, "Kuwait", &[]),
    c("LAO", 418, "Lao People's Democratic Republic", &["Lao PDR", "Laos"]),
    c("LBN", 422, "Lebanon", &[]),
    c("LBR", 430, "Liberia", &[]),
    c("LBY", 434, "Libya", &["Libyan Arab Jamahiriya"]),
    c("LCA", 662, "Saint Lucia", &["St. Lucia"]),
    c("LIE", 438, "Liechtenstein", &[]),
    c("LKA", 144, "Sri Lanka", &[]),
    c("LSO", 426, "Lesotho", &[]),
    c("LTU", 440, "Lithuania", &[]),
    c("LUX", 442, "Luxembourg", &[]),
    c("LVA", 428, "Latvia", &[]),
    c(
        "MAC",
        446,
        "Macao",
        &["Macao SAR, China", "China, Macao Special Administrative Region", "Macau"],
    ),
    c("MAF", 663, "Saint Martin (French part)", &["St. Martin (French part)"]),
    c("MAR", 504, "Morocco", &[]),
    c("MCO", 492, "Monaco", &[]),
    c("MDA", 498, "Republic of Moldova", &["Moldova"]),
    c("MDG", 450, "Madagascar", &[]),
    c("MDV", 462, "Maldives", &[]),
    c("MEX", 484, "Mexico", &[]),
    c("MHL", 584, "Marshall Islands", &[]),
    c(
        "MKD",
        807,
        "North Macedonia",
        &["The former Yugoslav Republic of Macedonia", "Macedonia"],
    ),
    c("MLI", 466, "Mali", &[]),
    c("MLT", 470, "Malta", &[]),
    c("MMR", 104, "Myanmar", &["Burma"]),
    c("MNE", 499, "Montenegro", &[]),
    c("MNG", 496, "Mongolia", &[]),
    c("MNP", 580, "Northern Mariana Islands", &[]),
    c("MOZ", 508, "Mozambique", &[]),
    c("MRT", 478, "Mauritania", &[]),
    c("MSR", 500, "Montserrat", &[]),
    c("MTQ", 474, "Martinique", &[]),
    c("MUS", 480, "Mauritius", &[]),
    c("MWI", 454, "Malawi", &[]),
    c("MYS", 458, "Malaysia", &[]),
    c("MYT", 175, "Mayotte", &[]),
    c("NAM", 516, "Namibia", &[]),
    c("NCL", 540, "New Caledonia", &[]),
    c("NER", 562, "Niger", &[]),
    c("NFK", 574, "Norfolk Island", &[]),
    c("NGA", 566, "Nigeria", &[]),
    c("NIC", 558, "Nicaragua", &[]),
    c("NIU", 570, "Niue", &[]),
    c("NLD", 528, "Netherlands", &["Netherlands (Kingdom of the)"]),
    c("NOR", 578, "Norway", &[]),
    c("NPL", 524, "Nepal", &[]),
    c("NRU", 520, "Nauru", &[]),
    c("NZL", 554, "New Zealand", &[]),
    c("OMN", 512, "Oman", &[]),
    c("PAK", 586, "Pakistan", &[]),
    c("PAN", 591, "Panama", &[]),
    c("PCN", 612, "Pitcairn", &["Pitcairn Islands"]),
    c("PER", 604, "Peru", &[]),
    c("PHL", 608, "Philippines", &[]),
    c("PLW", 585, "Palau", &[]),
    c("PNG", 598, "Papua New Guinea", &[]),
    c("POL", 616, "Poland", &[]),
    c("PRI", 630, "Puerto Rico", &[]),
    c(
        "PRK",
        408,
        "Democratic People's Republic of Korea",
        &["Korea, Dem. People's Rep.", "North Korea"],
    ),
    c("PRT", 620, "Portugal", &[]),
    c("PRY", 600, "Paraguay", &[]),
    c(
        "PSE",
        275,
        "State of Palestine",
        &["Palestine", "Palestine, State of", "West Bank and Gaza"],
    ),
    c("PYF", 258, "French Polynesia", &[]),
    c("QAT", 634, "Qatar", &[]),
    c("REU", 638, "Réunion", &[]),
    c("ROU", 642, "Romania", &[]),
    c("RUS", 643, "Russian Federation", &["Russia"]),
    c("RWA", 646, "Rwanda", &[]),
    c("SAU", 682, "Saudi Arabia", &[]),
    c("SDN", 729, "Sudan", &[]),
    c("SEN", 686, "Senegal", &[]),
    c("SGP", 702, "Singapore", &[]),
    c("SGS", 239, "South Georgia and the South Sandwich Islands", &["South Georgia"]),
    c("SHN", 654, "Saint Helena", &["Saint Helena, Ascension and Tristan da Cunha"]),
    c("SJM", 744, "Svalbard and Jan Mayen", &["Svalbard and Jan Mayen Islands"]),
    c("SLB", 90, "Solomon Islands", &[]),
    c("SLE", 694, "Sierra Leone", &[]),
    c("SLV", 222, "El Salvador", &[]),
    c("SMR", 674, "San Marino", &[]),
    c("SOM", 706, "Somalia", &[]),
    c("SPM", 666, "Saint Pierre and Miquelon", &[]),
    c("SRB", 688, "Serbia", &[]),
    c("SSD", 728, "South Sudan", &[]),
    c("STP", 678, "Sao Tome and Principe", &[]),
    c("SUR", 740, "Suriname", &[]),
    c("SVK", 703, "Slovakia", &["Slovak Republic"]),
    c("SVN", 705, "Slovenia", &[]),
    c("SWE", 752, "Sweden", &[]),
    c("SWZ", 748, "Eswatini", &["Swaziland"]),
    c("SXM", 534, "Sint Maarten (Dutch part)", &["Sint Maarten"]),
    c("SYC", 690, "Seychelles", &[]),
    c("SYR", 760, "Syrian Arab Republic", &["Syria"]),
    c("TCA", 796, "Turks and Caicos Islands", &[]),
    c("TCD", 148, "Chad", &[]),
    c("TGO", 768, "Togo", &[]),
    c("THA", 764, "Thailand", &[]),
    c("TJK", 762, "Tajikistan", &[]),
    c("TKL", 772, "Tokelau", &[]),
    c("TKM", 795, "Turkmenistan", &[]),
    c("TLS", 626, "Timor-Leste", &["East Timor"]),
    c("TON", 776, "Tonga", &[]),
    c("TTO", 780, "Trinidad and Tobago", &[]),
    c("TUN", 788, "Tunisia", &[]),
    c("TUR", 792, "Türkiye", &["Turkey"]),
    c("TUV", 798, "Tuvalu", &[]),
    c("TWN", 158, "Taiwan", &["Taiwan, China", "Taiwan Province of China"]),
    c("TZA", 834, "United Republic of Tanzania", &["Tanzania"]),
    c("UGA", 800, "Uganda", &[]),
    c("UKR", 804, "Ukraine", &[]),
    c("UMI", 581, "United States Minor Outlying Islands", &[]),
    c("URY", 858, "Uruguay", &[]),
    c("USA", 840, "United States", &["United States of America"]),
    c("UZB", 860, "Uzbekistan", &[]),
    c("VAT", 336, "Holy See", &["Vatican"]),
    c(
        "VCT",
        670,
        "Saint Vincent and the Grenadines",
        &["St. Vincent and the Grenadines"],
    ),
    c(
        "VEN",
        862,
        "Venezuela (Bolivarian Republic of)",
        &["Venezuela", "Venezuela, RB"],
    ),
    c("VGB", 92, "British Virgin Islands", &["Virgin Islands, British"]),
    c(
        "VIR",
        850,
        "United States Virgin Islands",
        &["Virgin Islands (U.S.)", "US Virgin Islands"],
    ),
    c("VNM", 704, "Viet Nam", &["Vietnam"]),
    c("VUT", 548, "Vanuatu", &[]),
    c("WLF", 876, "Wallis and Futuna", &["Wallis and Futuna Islands"]),
    c("WSM", 882, "Samoa", &[]),
    c("YEM", 887, "Yemen", &["Yemen, Rep."]),
    c("ZAF", 710, "South Africa", &[]),
    c("ZMB", 894, "Zambia", &[]),
    c("ZWE", 716, "Zimbabwe", &[]),
    // no ISO numeric code
    Country {
        iso3: "XKX",
        numeric: None,
        name: "Kosovo",
        aliases: &[],
    },
];

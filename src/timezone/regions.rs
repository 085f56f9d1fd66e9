//! Per-country resolvers for countries spanning several timezones.
//!
//! Dispatch is on the normalized admin-region name, then on the county
//! where a region straddles a zone boundary, then on coordinates where
//! even counties do not line up. The numeric guards encode actual legal
//! boundaries; their constants and comparison operators are not tunable.

use tracing::debug;

use crate::models::{AddressFacts, GeoPoint};

/// The zone for a multi-zone country, or `None` when the address gives
/// too little to go on and the caller should fall back.
pub(super) fn multi_zone(code: &str, address: &AddressFacts) -> Option<&'static str> {
    let point = address.point;
    let region = address.admin_region.as_deref();
    let locality = address.locality.as_deref();
    let county = address.sub_region.as_deref();
    match code {
        "AQ" => Some(antarctica(point)),
        "AR" => Some(argentina(region)),
        "AU" => australia(region, locality, point),
        "BR" => Some(brazil(region, point)),
        "CA" => canada(region, locality, point),
        "CL" => Some(chile(region, point)),
        "EC" => Some(ecuador(point)),
        "ES" => Some(spain(point)),
        "FM" => Some(micronesia(point)),
        "GL" => Some(greenland(point)),
        "ID" => indonesia(region),
        "KI" => Some(kiribati(point)),
        "KZ" => Some(kazakhstan(region)),
        "MN" => Some(mongolia(region)),
        "MX" => Some(mexico(region)),
        "NZ" => Some(new_zealand(point)),
        "PF" => Some(french_polynesia(point)),
        "PG" => Some(papua_new_guinea(region)),
        "PT" => Some(portugal(point)),
        "RU" => russia(region, point),
        "UM" => Some(outlying_islands(point)),
        "US" => united_states(region, county, point),
        _ => None,
    }
}

/// Strip the given noise substrings from a region name, fold the
/// diacritics the address lookup is known to emit, and trim. Stripping
/// runs first because some noise substrings carry diacritics themselves.
fn normalize_region(raw: &str, strip: &[&str]) -> String {
    let mut name = raw.to_string();
    for noise in strip {
        name = name.replace(noise, "");
    }
    name.chars()
        .map(|c| match c {
            'á' | 'ã' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' | 'ô' => 'o',
            'ú' => 'u',
            'ı' | 'ý' => 'y',
            other => other,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// No admin regions exist here; research-station zones are carved up by
/// latitude/longitude bands alone.
fn antarctica(p: GeoPoint) -> &'static str {
    if p.latitude < -88.75 {
        "Antarctica/South_Pole"
    } else if p.longitude > -90.0 && p.longitude < -20.0 {
        "Antarctica/Palmer"
    } else if p.longitude > 160.0 || p.longitude < -150.0 {
        "Antarctica/McMurdo"
    } else if p.latitude < -80.0 || p.longitude < 15.0 {
        "Antarctica/Troll"
    } else if p.longitude < 45.0 {
        "Antarctica/Syowa"
    } else if p.longitude < 70.0 {
        "Antarctica/Mawson"
    } else if p.longitude < 100.0 {
        "Antarctica/Davis"
    } else if p.longitude < 110.0 && p.latitude < -78.0 {
        "Antarctica/Troll"
    } else if p.longitude < 135.0 {
        "Antarctica/Casey"
    } else {
        "Antarctica/DumontDUrville"
    }
}

fn argentina(region: Option<&str>) -> &'static str {
    let region = normalize_region(region.unwrap_or(""), &["Provincia de ", " Province"]);
    match region.as_str() {
        "Buenos Aires" => "America/Argentina/Buenos_Aires",
        "Catamarca" | "Chubut" => "America/Argentina/Catamarca",
        "Jujuy" => "America/Argentina/Jujuy",
        "La Rioja" => "America/Argentina/La_Rioja",
        "Mendoza" => "America/Argentina/Mendoza",
        "Santa Cruz" => "America/Argentina/Rio_Gallegos",
        "Salta" => "America/Argentina/Salta",
        "San Juan" => "America/Argentina/San_Juan",
        "San Luis" => "America/Argentina/San_Luis",
        "Tucuman" => "America/Argentina/Tucuman",
        "Tierra del Fuego" => "America/Argentina/Ushuaia",
        _ => "America/Argentina/Cordoba",
    }
}

fn australia(
    region: Option<&str>,
    locality: Option<&str>,
    p: GeoPoint,
) -> Option<&'static str> {
    if p.latitude < -50.0 {
        return Some("Antarctica/Macquarie");
    }
    match region? {
        "South Australia" => Some("Australia/Adelaide"),
        "Queensland" => Some("Australia/Brisbane"),
        "Northern Territory" => Some("Australia/Darwin"),
        "Tasmania" => Some("Australia/Hobart"),
        "Victoria" => Some("Australia/Melbourne"),
        "Western Australia" => Some("Australia/Perth"),
        "New South Wales" | "Australian Capital Territory" | "Jervis Bay Territory" => {
            if p.longitude < 141.9 && p.latitude > -32.2 && p.latitude < -31.6 {
                Some("Australia/Broken_Hill")
            } else if locality == Some("Lord Howe Island") {
                Some("Australia/Lord_Howe")
            } else {
                Some("Australia/Sydney")
            }
        }
        _ => None,
    }
}

fn brazil(region: Option<&str>, p: GeoPoint) -> &'static str {
    if p.longitude > -34.0 {
        return "America/Noronha";
    }
    let region = normalize_region(region.unwrap_or(""), &["State of "]);
    match region.as_str() {
        "Roraima" => "America/Boa_Vista",
        "Amapa" | "Para" => "America/Belem",
        // The western tongue of Amazonas keeps an extra hour behind
        // Manaus; the boundary runs diagonally.
        "Amazonas" => {
            if -5.33 * p.longitude - 2.41 * p.latitude >= 382.97 {
                "America/Eirunepe"
            } else {
                "America/Manaus"
            }
        }
        "Maranhao" | "Piaui" | "Ceara" | "Rio Grande do Norte" | "Paraiba" => "America/Fortaleza",
        "Tocantins" => "America/Araguaina",
        "Acre" => "America/Rio_Branco",
        "Rondonia" => "America/Porto_Velho",
        "Mato Grosso" => "America/Cuiaba",
        "Pernambuco" => "America/Recife",
        "Bahia" => "America/Bahia",
        "Alagoas" | "Sergipe" => "America/Maceio",
        "Mato Grosso do Sul" => "America/Campo_Grande",
        _ => "America/Sao_Paulo",
    }
}

fn canada(region: Option<&str>, locality: Option<&str>, p: GeoPoint) -> Option<&'static str> {
    let region = normalize_region(region?, &[]);
    match region.as_str() {
        "Prince Edward Island" | "Nova Scotia" | "New Brunswick" => Some("America/Halifax"),
        "Manitoba" => Some("America/Winnipeg"),
        "Alberta" => Some("America/Edmonton"),
        "Yukon" => Some("America/Whitehorse"),
        "Northwest Territories" => Some("America/Yellowknife"),
        // The Lloydminster pocket follows Alberta.
        "Saskatchewan" => Some(
            if p.latitude < 53.55 && p.latitude > 53.0 && p.longitude < -109.55 {
                "America/Edmonton"
            } else {
                "America/Regina"
            },
        ),
        "Nunavut" => Some(if locality == Some("Coral Harbour") {
            "America/Coral_Harbour"
        } else if p.longitude > -85.0 || locality == Some("Arctic Bay") {
            "America/Iqaluit"
        } else if p.longitude < -102.0
            || (p.latitude > 67.0 && p.latitude < 73.0 && p.longitude < -89.0)
        {
            "America/Cambridge_Bay"
        } else {
            "America/Rankin_Inlet"
        }),
        "Newfoundland and Labrador" => Some(if p.longitude > -57.1 && p.latitude < 53.5 {
            "America/St_Johns"
        } else {
            "America/Goose_Bay"
        }),
        "Quebec" => Some(if p.longitude > -51.6 {
            "America/Blanc-Sablon"
        } else {
            "America/Montreal"
        }),
        "Ontario" => Some(if p.longitude > -90.0 {
            if p.latitude > 52.9 && p.latitude < 54.0 && p.longitude < -88.0 {
                "America/Winnipeg"
            } else {
                "America/Toronto"
            }
        } else if p.longitude > -91.0 && p.latitude > 51.0 && p.latitude < 51.7 {
            "America/Atikokan"
        } else if p.longitude > -91.0 && p.latitude < 49.2 {
            "America/Toronto"
        } else if p.longitude > -92.0 && p.latitude < 49.0 {
            "America/Atikokan"
        } else {
            "America/Winnipeg"
        }),
        "British Columbia" => Some(
            if p.latitude < 50.0
                && p.longitude > -116.88
                && (p.longitude < -116.4 || (p.latitude < 49.3 && p.longitude < -116.0))
            {
                "America/Creston"
            } else if p.longitude > -116.88 || (p.latitude > 51.0 && p.longitude > -117.7) {
                "America/Edmonton"
            } else if -6.24 * p.longitude - 8.63 * p.latitude < 284.65 {
                "America/Fort_Nelson"
            } else {
                "America/Vancouver"
            },
        ),
        _ => None,
    }
}

fn chile(region: Option<&str>, p: GeoPoint) -> &'static str {
    if p.longitude < -90.0 {
        "Pacific/Easter"
    } else if region.unwrap_or("").contains("Magallanes") {
        "America/Punta_Arenas"
    } else {
        "America/Santiago"
    }
}

fn ecuador(p: GeoPoint) -> &'static str {
    if p.longitude < -85.0 {
        "Pacific/Galapagos"
    } else {
        "America/Guayaquil"
    }
}

fn spain(p: GeoPoint) -> &'static str {
    if p.longitude < -10.0 {
        "Atlantic/Canary"
    } else {
        "Europe/Madrid"
    }
}

fn micronesia(p: GeoPoint) -> &'static str {
    if p.longitude > 154.0 {
        "Pacific/Pohnpei"
    } else {
        "Pacific/Chuuk"
    }
}

fn greenland(p: GeoPoint) -> &'static str {
    if p.longitude > -32.0 && p.latitude > 70.0 && p.latitude < 74.0 {
        "America/Scoresbysund"
    } else if p.longitude > -23.0 && p.latitude > 75.0 && p.latitude < 78.0 {
        "America/Danmarkshavn"
    } else if p.longitude < -66.0 {
        "America/Thule"
    } else {
        "America/Nuuk"
    }
}

fn indonesia(region: Option<&str>) -> Option<&'static str> {
    match region? {
        "Aceh" | "Bengkulu" | "Jambi" | "Lampung" | "North Sumatra" | "Sumatera Utara"
        | "Riau" | "South Sumatra" | "Sumatera Selatan" | "West Sumatra" | "Sumatera Barat"
        | "Riau Islands" | "Kepulauan Riau" | "Bangka Belitung Islands"
        | "Kepulauan Bangka Belitung" | "Banten" | "Jakarta"
        | "Daerah Khusus Ibukota Jakarta" | "West Java" | "Jawa Barat" | "Central Java"
        | "Jawa Tengah" | "Special Region of Yogyakarta" | "Daerah Istimewa Yogyakarta"
        | "East Java" | "Jawa Timur" => Some("Asia/Jakarta"),
        "West Kalimantan" | "Kalimantan Barat" | "Central Kalimantan" | "Kalimantan Tengah" => {
            Some("Asia/Pontianak")
        }
        "South Kalimantan" | "Kalimantan Selatan" | "East Kalimantan" | "Kalimantan Timur"
        | "North Kalimantan" | "Kalimantan Utara" | "North Sulawesi" | "Sulawesi Utara"
        | "Gorontalo" | "Central Sulawesi" | "Sulawesi Tengah" | "West Sulawesi"
        | "Sulawesi Barat" | "South Sulawesi" | "Sulawesi Selatan" | "South East Sulawesi"
        | "Sulawesi Tenggara" | "Bali" | "West Nusa Tenggara" | "Nusa Tenggara Barat"
        | "East Nusa Tenggara" | "Nusa Tenggara Timur" => Some("Asia/Makassar"),
        "Maluku" | "North Maluku" | "Maluku Utara" | "West Papua" | "Papua Barat" | "Papua" => {
            Some("Asia/Jayapura")
        }
        _ => None,
    }
}

fn kiribati(p: GeoPoint) -> &'static str {
    if p.longitude < -178.0 || p.longitude > 0.0 {
        "Pacific/Tarawa"
    } else if p.latitude > -2.5 || p.longitude > -158.5 {
        "Pacific/Kiritimati"
    } else {
        "Pacific/Kanton"
    }
}

fn kazakhstan(region: Option<&str>) -> &'static str {
    let region = normalize_region(region.unwrap_or(""), &[" Province", " oblısı"]);
    match region.as_str() {
        "Kyzylorda" | "Qyzylorda" => "Asia/Qyzylorda",
        "Kostanay" | "Qostanay" => "Asia/Qostanay",
        "Aktobe" | "Aqtobe" => "Asia/Aqtobe",
        "Mangystau" => "Asia/Aqtau",
        "Atyrau" => "Asia/Atyrau",
        "West Kazakhstan" => "Asia/Oral",
        _ => "Asia/Almaty",
    }
}

fn mongolia(region: Option<&str>) -> &'static str {
    match region.unwrap_or("") {
        "Bayan-Ölgii" | "Bayan-Olgiy" | "Govi-Altai" | "Khovd" | "Hovd" | "Uvs" | "Zavkhan" => {
            "Asia/Hovd"
        }
        "Dornod" | "Sükhbaatar" | "Sukhbaatar" => "Asia/Choibalsan",
        _ => "Asia/Ulaanbaatar",
    }
}

fn mexico(region: Option<&str>) -> &'static str {
    let region = normalize_region(region.unwrap_or(""), &[]);
    match region.as_str() {
        "Baja California" => "America/Tijuana",
        "Sonora" => "America/Hermosillo",
        "Baja California Sur" | "Nayarit" | "Sinaloa" => "America/Mazatlan",
        "Chihuahua" => "America/Chihuahua",
        "Quintana Roo" => "America/Cancun",
        _ => "America/Mexico_City",
    }
}

fn new_zealand(p: GeoPoint) -> &'static str {
    if p.longitude < 0.0 {
        "Pacific/Chatham"
    } else {
        "Pacific/Auckland"
    }
}

fn french_polynesia(p: GeoPoint) -> &'static str {
    if p.longitude > -135.3 && p.latitude < -23.0 {
        "Pacific/Gambier"
    } else if p.longitude > 142.5 && p.latitude > -11.0 {
        "Pacific/Marquesas"
    } else {
        "Pacific/Tahiti"
    }
}

fn papua_new_guinea(region: Option<&str>) -> &'static str {
    if region.unwrap_or("").contains("Bougainville") {
        "Pacific/Bougainville"
    } else {
        "Pacific/Port_Moresby"
    }
}

fn portugal(p: GeoPoint) -> &'static str {
    if p.latitude < 35.0 {
        "Atlantic/Madeira"
    } else if p.longitude < -15.0 {
        "Atlantic/Azores"
    } else {
        "Europe/Lisbon"
    }
}

fn russia(region: Option<&str>, p: GeoPoint) -> Option<&'static str> {
    let region = normalize_region(
        region.unwrap_or(""),
        &[
            "'",
            "Respublika",
            "Republic of ",
            "Republic ",
            "Oblast",
            "oblast",
            " Autonomous Okrug",
            " avtonomnyy okrug",
            "Krai",
            "kray",
            "skaya",
            "skaja",
        ],
    );
    let zone = match region.as_str() {
        "Kaliningrad" => "Europe/Kaliningrad",
        "Kirov" => "Europe/Kirov",
        "Saratov" | "Volgograd" | "Astrakhan" => "Europe/Volgograd",
        "Samar" | "Samara" | "Udmurt" => "Europe/Samara",
        "Ulyanovsk" => "Europe/Ulyanovsk",
        "Bashkortostan" | "Chelyabin" | "Chelyabinsk" | "Khanty-Mansi" | "Khanty-Mansiyskiy"
        | "Kurgan" | "Orenburg" | "Perm" | "Permskiy" | "Sverdlov" | "Sverdlovsk" | "Tyumen"
        | "Yamalo-Nenets" | "Yamalo-Nenetskiy" => "Asia/Yekaterinburg",
        "Altai" | "Altay" | "Altayskiy" | "Om" | "Omsk" => "Asia/Omsk",
        "Novosibir" | "Novosibirsk" | "Tom" | "Tomsk" => "Asia/Novosibirsk",
        "Kemerov" | "Kemerovo" => "Asia/Novokuznetsk",
        "Khakasiya" | "Khakassia" | "Krasnoyarsk" | "Krasnoyarskiy" | "Tuva" => {
            "Asia/Krasnoyarsk"
        }
        "Irkut" | "Irkutsk" | "Buryatia" | "Buryatiya" => "Asia/Irkutsk",
        "Amur" | "Zabaykalsky" => "Asia/Yakutsk",
        "Jewish Autonomous" | "Evrey avtonomnaya" | "Khabarovsk" | "Khabarovskiy" | "Primorsky"
        | "Primorskiy" => "Asia/Vladivostok",
        "Sakhalin" => "Asia/Sakhalin",
        "Magadan" => "Asia/Magadan",
        "Kamchatka" => "Asia/Kamchatka",
        "Chukotka" => "Asia/Anadyr",
        // Sakha alone spans three zones; carve it up by coordinates.
        "Sakha" => {
            if p.longitude > 142.0
                && p.latitude < 73.0
                && (p.latitude > 65.2 || p.longitude > 146.2)
            {
                "Asia/Srednekolymsk"
            } else if p.longitude > 140.0 && p.latitude < 65.2 {
                "Asia/Ust-Nera"
            } else if (p.longitude > 133.5 && p.latitude > 65.2)
                || (p.longitude > 131.0 && p.latitude > 65.5 && p.latitude < 68.0)
            {
                "Asia/Vladivostok"
            } else {
                "Asia/Yakutsk"
            }
        }
        _ => {
            debug!(region = %region, "unmapped Russian region");
            if p.longitude < 68.0 {
                return Some("Europe/Moscow");
            }
            return None;
        }
    };
    Some(zone)
}

fn outlying_islands(p: GeoPoint) -> &'static str {
    if p.latitude > 20.0 {
        "Pacific/Midway"
    } else if p.longitude > 0.0 {
        "Pacific/Wake"
    } else if p.latitude > 10.0 {
        "Pacific/Johnston"
    } else if p.longitude < -170.0 {
        // Howland and Baker Islands
        "Etc/GMT+12"
    } else {
        "Pacific/Midway"
    }
}

fn united_states(
    region: Option<&str>,
    county: Option<&str>,
    p: GeoPoint,
) -> Option<&'static str> {
    let county = county.unwrap_or("");
    match region? {
        "Connecticut" | "Delaware" | "District of Columbia" | "Georgia" | "Maine" | "Maryland"
        | "Massachusetts" | "New Hampshire" | "New Jersey" | "New York" | "North Carolina"
        | "Ohio" | "Pennsylvania" | "Rhode Island" | "South Carolina" | "Vermont" | "Virginia"
        | "West Virginia" => Some("America/New_York"),
        "Alabama" | "Arkansas" | "Illinois" | "Iowa" | "Louisiana" | "Minnesota"
        | "Mississippi" | "Missouri" | "Oklahoma" | "Wisconsin" => Some("America/Chicago"),
        "Colorado" | "Montana" | "New Mexico" | "Utah" | "Wyoming" => Some("America/Denver"),
        "California" | "Nevada" | "Washington" => Some("America/Los_Angeles"),
        "Alaska" => Some(if p.longitude < -169.5 || p.longitude > 0.0 {
            "America/Adak"
        } else {
            "America/Anchorage"
        }),
        // The Navajo Nation observes DST inside a state that does not;
        // its outline only roughly follows county lines.
        "Arizona" => Some(
            if ((p.latitude > 35.22 && p.longitude > -111.0)
                || (p.latitude > 35.77 && p.latitude < 36.87 && p.longitude > -111.75))
                && !(p.latitude > 35.6
                    && p.latitude < 36.0
                    && p.longitude > -111.0
                    && p.longitude < -110.15)
            {
                "America/Shiprock"
            } else {
                "America/Phoenix"
            },
        ),
        "Florida" => Some(
            if (-3.99 * p.longitude - 2.02 * p.latitude > 278.862
                || -5.81 * p.longitude + 2.8 * p.latitude > 579.039)
                && (p.latitude > 30.0 || p.longitude < -84.95)
            {
                "America/Chicago"
            } else {
                "America/New_York"
            },
        ),
        "Hawaii" => Some("Pacific/Honolulu"),
        "Idaho" => Some(if p.latitude > 45.5 && p.longitude < -114.0 {
            "America/Los_Angeles"
        } else {
            "America/Boise"
        }),
        "Indiana" => Some(match county {
            "Jasper County" | "Lake County" | "LaPorte County" | "Newton County"
            | "Porter County" | "Gibson County" | "Posey County" | "Spencer County"
            | "Vanderburgh County" | "Warrick County" => "America/Chicago",
            "Starke County" => "America/Indiana/Knox",
            "Perry County" => "America/Indiana/Tell_City",
            "Pulaski County" => "America/Indiana/Winamac",
            "Pike County" => "America/Indiana/Petersburg",
            "Daviess County" | "Dubois County" | "Knox County" | "Martin County" => {
                "America/Indiana/Vincennes"
            }
            "Crawford County" => "America/Indiana/Marengo",
            "Clark County" | "Floyd County" | "Harrison County" => "America/Kentucky/Louisville",
            "Switzerland County" => "America/Indiana/Vevay",
            _ => "America/Indiana/Indianapolis",
        }),
        "Kansas" => Some(match county {
            "Sherman County" | "Wallace County" | "Greeley County" | "Hamilton County" => {
                "America/Denver"
            }
            _ => "America/Chicago",
        }),
        "Kentucky" => Some(match county {
            "Adair County" | "Allen County" | "Ballard County" | "Barren County"
            | "Breckinridge County" | "Butler County" | "Caldwell County" | "Calloway County"
            | "Carlisle County" | "Christian County" | "Clinton County" | "Crittenden County"
            | "Cumberland County" | "Daviess County" | "Edmonson County" | "Fulton County"
            | "Graves County" | "Grayson County" | "Green County" | "Hancock County"
            | "Hart County" | "Henderson County" | "Hickman County" | "Hopkins County"
            | "Livingston County" | "Logan County" | "Lyon County" | "McCracken County"
            | "McLean County" | "Marshall County" | "Meade County" | "Metcalfe County"
            | "Monroe County" | "Muhlenberg County" | "Ohio County" | "Russell County"
            | "Simpson County" | "Todd County" | "Trigg County" | "Union County"
            | "Warren County" | "Webster County" => "America/Chicago",
            _ => "America/New_York",
        }),
        "Michigan" => Some(match county {
            "Gogebic County" | "Iron County" | "Dickinson County" | "Menominee County" => {
                "America/Menominee"
            }
            _ => "America/Detroit",
        }),
        "Nebraska" => Some(match county {
            "Arthur County" | "Chase County" | "Dundy County" | "Grant County"
            | "Hooker County" | "Keith County" | "Perkins County" | "Sioux County"
            | "Scotts Bluff County" | "Banner County" | "Kimball County" | "Dawes County"
            | "Box Butte County" | "Morrill County" | "Cheyenne County" | "Sheridan County"
            | "Garden County" | "Deuel County" => "America/Denver",
            "Cherry County" => {
                if p.longitude < -100.65 {
                    "America/Denver"
                } else {
                    "America/Chicago"
                }
            }
            _ => "America/Chicago",
        }),
        "North Dakota" => Some(match county {
            "Bowman County" | "Adams County" | "Slope County" | "Hettinger County"
            | "Grant County" | "Stark County" | "Billings County" | "Golden Valley County" => {
                "America/Denver"
            }
            "Dunn County" | "McKenzie County" => {
                if p.longitude < -102.0 && p.latitude < 47.45 {
                    "America/Denver"
                } else {
                    "America/Chicago"
                }
            }
            _ => "America/Chicago",
        }),
        "Oregon" => Some(if county == "Malheur County" && p.latitude > 42.4 {
            "America/Boise"
        } else {
            "America/Los_Angeles"
        }),
        "South Dakota" => Some(match county {
            "Harding County" | "Perkins County" | "Corson County" | "Dewey County"
            | "Ziebach County" | "Haakon County" | "Jackson County" | "Bennett County"
            | "Meade County" | "Lawrence County" | "Pennington County" | "Custer County"
            | "Fall River County" | "Oglala Lakota County" | "Butte County" => "America/Denver",
            _ => "America/Chicago",
        }),
        "Tennessee" => Some(match county {
            "Scott County" | "Campbell County" | "Claiborne County" | "Hancock County"
            | "Hawkins County" | "Sullivan County" | "Johnson County" | "Morgan County"
            | "Anderson County" | "Union County" | "Grainger County" | "Hamblen County"
            | "Greene County" | "Washington County" | "Unicoi County" | "Carter County"
            | "Roane County" | "Loudon County" | "Knox County" | "Blount County"
            | "Jefferson County" | "Sevier County" | "Cocke County" | "Rhea County"
            | "Meigs County" | "McMinn County" | "Monroe County" | "Hamilton County"
            | "Bradley County" | "Polk County" => "America/New_York",
            _ => "America/Chicago",
        }),
        "Texas" => Some(match county {
            "El Paso County" | "Hudspeth County" => "America/Denver",
            _ => "America/Chicago",
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn facts(
        region: Option<&str>,
        county: Option<&str>,
        locality: Option<&str>,
        latitude: f64,
        longitude: f64,
    ) -> AddressFacts {
        AddressFacts {
            country_code: None,
            admin_region: region.map(String::from),
            sub_region: county.map(String::from),
            locality: locality.map(String::from),
            point: GeoPoint::new(latitude, longitude),
        }
    }

    #[rstest]
    #[case(-90.0, 0.0, "Antarctica/South_Pole")]
    #[case(-64.77, -64.05, "Antarctica/Palmer")]
    #[case(-77.85, 166.67, "Antarctica/McMurdo")]
    #[case(-72.01, 2.53, "Antarctica/Troll")]
    #[case(-69.0, 39.58, "Antarctica/Syowa")]
    #[case(-68.6, 77.97, "Antarctica/Davis")]
    #[case(-66.66, 140.0, "Antarctica/DumontDUrville")]
    fn test_antarctic_bands(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: &str) {
        let address = facts(None, None, None, latitude, longitude);
        assert_eq!(multi_zone("AQ", &address), Some(expected));
    }

    #[rstest]
    #[case("Mendoza", "America/Argentina/Mendoza")]
    #[case("Provincia de Tucumán", "America/Argentina/Tucuman")]
    #[case("Santa Fe", "America/Argentina/Cordoba")]
    fn test_argentina_region_normalization(#[case] region: &str, #[case] expected: &str) {
        let address = facts(Some(region), None, None, -32.9, -68.8);
        assert_eq!(multi_zone("AR", &address), Some(expected));
    }

    #[test]
    fn test_australia_broken_hill_pocket() {
        let inside = facts(Some("New South Wales"), None, None, -31.95, 141.45);
        assert_eq!(multi_zone("AU", &inside), Some("Australia/Broken_Hill"));
        let sydney = facts(Some("New South Wales"), None, None, -33.87, 151.21);
        assert_eq!(multi_zone("AU", &sydney), Some("Australia/Sydney"));
        let lord_howe = facts(
            Some("New South Wales"),
            None,
            Some("Lord Howe Island"),
            -31.55,
            159.08,
        );
        assert_eq!(multi_zone("AU", &lord_howe), Some("Australia/Lord_Howe"));
    }

    #[test]
    fn test_australia_macquarie_before_regions() {
        let address = facts(Some("Tasmania"), None, None, -54.5, 158.95);
        assert_eq!(multi_zone("AU", &address), Some("Antarctica/Macquarie"));
    }

    #[test]
    fn test_australia_without_region_falls_through() {
        let address = facts(None, None, None, -25.0, 134.0);
        assert_eq!(multi_zone("AU", &address), None);
    }

    #[rstest]
    // Eirunepe itself, far west of the diagonal.
    #[case(-6.66, -69.87, "America/Eirunepe")]
    // Manaus, east of it.
    #[case(-3.12, -60.02, "America/Manaus")]
    fn test_brazil_amazonas_split(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] expected: &str,
    ) {
        let address = facts(Some("Amazonas"), None, None, latitude, longitude);
        assert_eq!(multi_zone("BR", &address), Some(expected));
    }

    #[test]
    fn test_brazil_noronha_wins_over_region() {
        let address = facts(Some("Pernambuco"), None, None, -3.85, -32.42);
        assert_eq!(multi_zone("BR", &address), Some("America/Noronha"));
    }

    #[test]
    fn test_brazil_state_prefix_stripped() {
        let address = facts(Some("State of São Paulo"), None, None, -23.55, -46.63);
        assert_eq!(multi_zone("BR", &address), Some("America/Sao_Paulo"));
    }

    #[test]
    fn test_canada_lloydminster_pocket() {
        let pocket = facts(Some("Saskatchewan"), None, None, 53.28, -110.0);
        assert_eq!(multi_zone("CA", &pocket), Some("America/Edmonton"));
        let regina = facts(Some("Saskatchewan"), None, None, 50.45, -104.62);
        assert_eq!(multi_zone("CA", &regina), Some("America/Regina"));
    }

    #[test]
    fn test_canada_quebec_accent_folded() {
        let address = facts(Some("Québec"), None, None, 45.5, -73.57);
        assert_eq!(multi_zone("CA", &address), Some("America/Montreal"));
    }

    #[test]
    fn test_canada_nunavut_localities() {
        let coral = facts(
            Some("Nunavut"),
            None,
            Some("Coral Harbour"),
            64.14,
            -83.17,
        );
        assert_eq!(multi_zone("CA", &coral), Some("America/Coral_Harbour"));
        let iqaluit = facts(Some("Nunavut"), None, None, 63.75, -68.52);
        assert_eq!(multi_zone("CA", &iqaluit), Some("America/Iqaluit"));
    }

    #[test]
    fn test_canada_british_columbia_corners() {
        let vancouver = facts(Some("British Columbia"), None, None, 49.28, -123.12);
        assert_eq!(multi_zone("CA", &vancouver), Some("America/Vancouver"));
        let fort_nelson = facts(Some("British Columbia"), None, None, 58.81, -122.7);
        assert_eq!(multi_zone("CA", &fort_nelson), Some("America/Fort_Nelson"));
        let creston = facts(Some("British Columbia"), None, None, 49.1, -116.51);
        assert_eq!(multi_zone("CA", &creston), Some("America/Creston"));
    }

    #[rstest]
    #[case(-27.15, -109.43, None, "Pacific/Easter")]
    #[case(-53.16, -70.91, Some("Magallanes y la Antártica Chilena"), "America/Punta_Arenas")]
    #[case(-33.45, -70.66, Some("Región Metropolitana"), "America/Santiago")]
    fn test_chile(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] region: Option<&str>,
        #[case] expected: &str,
    ) {
        let address = facts(region, None, None, latitude, longitude);
        assert_eq!(multi_zone("CL", &address), Some(expected));
    }

    #[rstest]
    #[case("Bali", "Asia/Makassar")]
    #[case("Jawa Timur", "Asia/Jakarta")]
    #[case("East Java", "Asia/Jakarta")]
    #[case("Papua", "Asia/Jayapura")]
    fn test_indonesia_synonyms(#[case] region: &str, #[case] expected: &str) {
        let address = facts(Some(region), None, None, -7.0, 110.0);
        assert_eq!(multi_zone("ID", &address), Some(expected));
    }

    #[rstest]
    #[case("Atyrau Province", "Asia/Atyrau")]
    #[case("Qyzylorda oblısı", "Asia/Qyzylorda")]
    #[case("Almaty", "Asia/Almaty")]
    fn test_kazakhstan_suffix_stripping(#[case] region: &str, #[case] expected: &str) {
        let address = facts(Some(region), None, None, 47.0, 60.0);
        assert_eq!(multi_zone("KZ", &address), Some(expected));
    }

    #[rstest]
    #[case("Khovd", "Asia/Hovd")]
    #[case("Hovd", "Asia/Hovd")]
    #[case("Sükhbaatar", "Asia/Choibalsan")]
    #[case("Töv", "Asia/Ulaanbaatar")]
    fn test_mongolia_synonyms(#[case] region: &str, #[case] expected: &str) {
        let address = facts(Some(region), None, None, 47.9, 106.9);
        assert_eq!(multi_zone("MN", &address), Some(expected));
    }

    #[test]
    fn test_mexico_accent_folded() {
        let address = facts(Some("Quintana Roo"), None, None, 21.16, -86.85);
        assert_eq!(multi_zone("MX", &address), Some("America/Cancun"));
        let sonora = facts(Some("Sonora"), None, None, 29.07, -110.96);
        assert_eq!(multi_zone("MX", &sonora), Some("America/Hermosillo"));
    }

    #[rstest]
    #[case("Samarskaya Oblast", "Europe/Samara")]
    #[case("Sverdlovskaya oblast", "Asia/Yekaterinburg")]
    #[case("Primorsky Krai", "Asia/Vladivostok")]
    #[case("Republic of Bashkortostan", "Asia/Yekaterinburg")]
    fn test_russia_suffix_chains(#[case] region: &str, #[case] expected: &str) {
        let address = facts(Some(region), None, None, 55.0, 60.0);
        assert_eq!(multi_zone("RU", &address), Some(expected));
    }

    #[rstest]
    #[case(68.0, 150.0, "Asia/Srednekolymsk")]
    #[case(64.57, 143.2, "Asia/Ust-Nera")]
    #[case(62.03, 129.73, "Asia/Yakutsk")]
    fn test_russia_sakha_bands(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] expected: &str,
    ) {
        let address = facts(Some("Sakha"), None, None, latitude, longitude);
        assert_eq!(multi_zone("RU", &address), Some(expected));
    }

    #[test]
    fn test_russia_unmapped_region_splits_on_longitude() {
        let west = facts(Some("Moskva"), None, None, 55.75, 37.61);
        assert_eq!(multi_zone("RU", &west), Some("Europe/Moscow"));
        let east = facts(Some("Unknown"), None, None, 65.0, 100.0);
        assert_eq!(multi_zone("RU", &east), None);
    }

    #[rstest]
    #[case("New York", None, 40.7, -74.0, "America/New_York")]
    #[case("Texas", Some("El Paso County"), 31.76, -106.49, "America/Denver")]
    #[case("Texas", Some("Harris County"), 29.76, -95.37, "America/Chicago")]
    #[case("Indiana", Some("Starke County"), 41.28, -86.65, "America/Indiana/Knox")]
    #[case("Indiana", Some("Marion County"), 39.77, -86.16, "America/Indiana/Indianapolis")]
    #[case("Kentucky", Some("Warren County"), 36.99, -86.44, "America/Chicago")]
    #[case("Kentucky", Some("Fayette County"), 38.04, -84.5, "America/New_York")]
    #[case("Michigan", Some("Iron County"), 46.09, -88.64, "America/Menominee")]
    #[case("Oregon", Some("Malheur County"), 43.9, -117.2, "America/Boise")]
    #[case("Oregon", Some("Multnomah County"), 45.52, -122.68, "America/Los_Angeles")]
    #[case("Hawaii", None, 21.31, -157.86, "Pacific/Honolulu")]
    fn test_united_states_counties(
        #[case] state: &str,
        #[case] county: Option<&str>,
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] expected: &str,
    ) {
        let address = facts(Some(state), county, None, latitude, longitude);
        assert_eq!(multi_zone("US", &address), Some(expected));
    }

    #[rstest]
    // Window Rock, Navajo Nation.
    #[case(35.68, -109.05, "America/Shiprock")]
    // Phoenix.
    #[case(33.45, -112.07, "America/Phoenix")]
    // Tuba City, inside the nation's western arm.
    #[case(36.13, -111.24, "America/Shiprock")]
    // Hopi reservation hole inside the nation.
    #[case(35.87, -110.6, "America/Phoenix")]
    fn test_united_states_arizona_carveouts(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] expected: &str,
    ) {
        let address = facts(Some("Arizona"), None, None, latitude, longitude);
        assert_eq!(multi_zone("US", &address), Some(expected));
    }

    #[rstest]
    // Pensacola, in the panhandle.
    #[case(30.42, -87.22, "America/Chicago")]
    // Miami.
    #[case(25.76, -80.19, "America/New_York")]
    fn test_united_states_florida_panhandle(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] expected: &str,
    ) {
        let address = facts(Some("Florida"), None, None, latitude, longitude);
        assert_eq!(multi_zone("US", &address), Some(expected));
    }

    #[test]
    fn test_united_states_alaska_aleutians() {
        let adak = facts(Some("Alaska"), None, None, 51.87, -176.64);
        assert_eq!(multi_zone("US", &adak), Some("America/Adak"));
        let attu = facts(Some("Alaska"), None, None, 52.9, 172.9);
        assert_eq!(multi_zone("US", &attu), Some("America/Adak"));
        let anchorage = facts(Some("Alaska"), None, None, 61.22, -149.9);
        assert_eq!(multi_zone("US", &anchorage), Some("America/Anchorage"));
    }

    #[test]
    fn test_united_states_unknown_state_falls_through() {
        let address = facts(Some("Atlantis"), None, None, 30.0, -80.0);
        assert_eq!(multi_zone("US", &address), None);
    }

    #[rstest]
    #[case(28.2, -177.37, "Pacific/Midway")]
    #[case(19.28, 166.64, "Pacific/Wake")]
    #[case(16.73, -169.53, "Pacific/Johnston")]
    #[case(0.8, -176.62, "Etc/GMT+12")]
    fn test_outlying_islands(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] expected: &str,
    ) {
        let address = facts(None, None, None, latitude, longitude);
        assert_eq!(multi_zone("UM", &address), Some(expected));
    }

    #[rstest]
    #[case(-0.95, -90.97, "Pacific/Galapagos")]
    #[case(-0.18, -78.47, "America/Guayaquil")]
    fn test_ecuador(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: &str) {
        let address = facts(None, None, None, latitude, longitude);
        assert_eq!(multi_zone("EC", &address), Some(expected));
    }

    #[rstest]
    #[case(28.12, -15.43, "Atlantic/Canary")]
    #[case(40.42, -3.7, "Europe/Madrid")]
    fn test_spain(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: &str) {
        let address = facts(None, None, None, latitude, longitude);
        assert_eq!(multi_zone("ES", &address), Some(expected));
    }

    #[rstest]
    #[case(32.65, -16.91, "Atlantic/Madeira")]
    #[case(37.74, -25.67, "Atlantic/Azores")]
    #[case(38.72, -9.14, "Europe/Lisbon")]
    fn test_portugal(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: &str) {
        let address = facts(None, None, None, latitude, longitude);
        assert_eq!(multi_zone("PT", &address), Some(expected));
    }

    #[test]
    fn test_new_zealand_chatham() {
        let chatham = facts(None, None, None, -43.95, -176.55);
        assert_eq!(multi_zone("NZ", &chatham), Some("Pacific/Chatham"));
        let auckland = facts(None, None, None, -36.85, 174.76);
        assert_eq!(multi_zone("NZ", &auckland), Some("Pacific/Auckland"));
    }

    #[rstest]
    #[case(1.33, 172.98, "Pacific/Tarawa")]
    #[case(1.87, -157.43, "Pacific/Kiritimati")]
    #[case(-2.81, -171.67, "Pacific/Kanton")]
    fn test_kiribati(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: &str) {
        let address = facts(None, None, None, latitude, longitude);
        assert_eq!(multi_zone("KI", &address), Some(expected));
    }

    #[test]
    fn test_greenland_bands() {
        let nuuk = facts(None, None, None, 64.18, -51.69);
        assert_eq!(multi_zone("GL", &nuuk), Some("America/Nuuk"));
        let thule = facts(None, None, None, 76.53, -68.7);
        assert_eq!(multi_zone("GL", &thule), Some("America/Thule"));
        let scoresbysund = facts(None, None, None, 70.48, -21.96);
        assert_eq!(multi_zone("GL", &scoresbysund), Some("America/Scoresbysund"));
    }

    #[test]
    fn test_papua_new_guinea_bougainville() {
        let bougainville = facts(
            Some("Autonomous Region of Bougainville"),
            None,
            None,
            -6.22,
            155.56,
        );
        assert_eq!(multi_zone("PG", &bougainville), Some("Pacific/Bougainville"));
        let moresby = facts(None, None, None, -9.44, 147.18);
        assert_eq!(multi_zone("PG", &moresby), Some("Pacific/Port_Moresby"));
    }
}

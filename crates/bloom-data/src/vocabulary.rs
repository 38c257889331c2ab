//! Closed vocabularies for every enumerated company field.
//!
//! Each vocabulary is a plain `enum` whose serde representation, `Display`
//! output and `FromStr` input are the exact human-readable label used in the
//! directory UI and in shareable URLs. `ALL` lists the members in canonical
//! order, which is also the order used for tie-breaking in aggregates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VocabularyError;

/// City used when a country has no headquarters table.
pub const FALLBACK_CITY: &str = "Capital City";

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $first:ident => $first_label:literal
            $(, $variant:ident => $label:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            #[doc = $first_label]
            #[serde(rename = $first_label)]
            $first,
            $(
                #[doc = $label]
                #[serde(rename = $label)]
                $variant,
            )*
        }

        impl $name {
            /// Every member of the vocabulary in canonical order.
            pub const ALL: &'static [Self] = &[Self::$first $(, Self::$variant)*];

            /// Returns the display label.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    Self::$first => $first_label,
                    $(Self::$variant => $label,)*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$first
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = VocabularyError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $first_label => Ok(Self::$first),
                    $($label => Ok(Self::$variant),)*
                    _ => Err(VocabularyError::UnknownLabel {
                        vocabulary: $kind,
                        value: value.to_owned(),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Line of business within the flower industry.
    pub enum Category as "category" {
        Florist => "Florist",
        Nursery => "Nursery",
        Wholesale => "Wholesale",
        Grower => "Grower",
        ImporterExporter => "Importer/Exporter",
        GardenCenter => "Garden Center",
        Landscaping => "Landscaping",
        EventFlorist => "Event Florist",
        OnlineRetailer => "Online Retailer",
        Supplier => "Supplier",
    }
}

vocabulary! {
    /// Flower or service specialty.
    pub enum Specialty as "specialty" {
        Roses => "Roses",
        Tulips => "Tulips",
        Orchids => "Orchids",
        Lilies => "Lilies",
        Sunflowers => "Sunflowers",
        Carnations => "Carnations",
        Chrysanthemums => "Chrysanthemums",
        Hydrangeas => "Hydrangeas",
        Peonies => "Peonies",
        Daisies => "Daisies",
        Succulents => "Succulents",
        TropicalPlants => "Tropical Plants",
        NativePlants => "Native Plants",
        CutFlowers => "Cut Flowers",
        PottedPlants => "Potted Plants",
        DriedFlowers => "Dried Flowers",
        WeddingFlowers => "Wedding Flowers",
        FuneralArrangements => "Funeral Arrangements",
        CorporateEvents => "Corporate Events",
        SeasonalArrangements => "Seasonal Arrangements",
    }
}

vocabulary! {
    /// Head-count bracket.
    pub enum EmployeeRange as "employee range" {
        UpTo10 => "1-10",
        From11To50 => "11-50",
        From51To200 => "51-200",
        From201To500 => "201-500",
        From501To1000 => "501-1000",
        Over1000 => "1000+",
    }
}

vocabulary! {
    /// Customer segment served.
    pub enum BusinessType as "business type" {
        B2b => "B2B",
        B2c => "B2C",
        Both => "Both",
    }
}

vocabulary! {
    /// Annual revenue bracket in US dollars.
    pub enum RevenueRange as "revenue range" {
        Under100K => "Under $100K",
        From100KTo500K => "$100K-$500K",
        From500KTo1M => "$500K-$1M",
        From1MTo5M => "$1M-$5M",
        From5MTo10M => "$5M-$10M",
        From10MTo50M => "$10M-$50M",
        Over50M => "$50M+",
    }
}

vocabulary! {
    /// Industry or sustainability certification.
    pub enum Certification as "certification" {
        OrganicCertified => "Organic Certified",
        FairTrade => "Fair Trade",
        RainforestAlliance => "Rainforest Alliance",
        Veriflora => "Veriflora",
        Mps => "MPS",
        GlobalGap => "GlobalG.A.P.",
        UsdaOrganic => "USDA Organic",
        CarbonNeutral => "Carbon Neutral",
        FscCertified => "FSC Certified",
        Iso14001 => "ISO 14001",
    }
}

vocabulary! {
    /// Country of incorporation.
    pub enum Country as "country" {
        UnitedStates => "United States",
        Netherlands => "Netherlands",
        Colombia => "Colombia",
        Ecuador => "Ecuador",
        Kenya => "Kenya",
        Ethiopia => "Ethiopia",
        Japan => "Japan",
        Germany => "Germany",
        UnitedKingdom => "United Kingdom",
        France => "France",
        Italy => "Italy",
        Spain => "Spain",
        Australia => "Australia",
        Canada => "Canada",
        Mexico => "Mexico",
        Brazil => "Brazil",
        China => "China",
        India => "India",
        Thailand => "Thailand",
        SouthAfrica => "South Africa",
    }
}

impl Country {
    /// Returns the cities a headquarters may be placed in.
    ///
    /// Generation falls back to [`FALLBACK_CITY`] when the table is empty.
    #[must_use]
    pub const fn cities(self) -> &'static [&'static str] {
        match self {
            Self::UnitedStates => &[
                "New York",
                "Los Angeles",
                "Chicago",
                "Miami",
                "San Francisco",
                "Seattle",
                "Denver",
                "Austin",
                "Boston",
                "Portland",
            ],
            Self::Netherlands => &[
                "Amsterdam",
                "Rotterdam",
                "Aalsmeer",
                "The Hague",
                "Utrecht",
                "Eindhoven",
            ],
            Self::Colombia => &["Bogotá", "Medellín", "Cali", "Rionegro", "Facatativá"],
            Self::Ecuador => &["Quito", "Guayaquil", "Cayambe", "Latacunga", "Tabacundo"],
            Self::Kenya => &["Nairobi", "Naivasha", "Nakuru", "Eldoret", "Thika"],
            Self::Ethiopia => &["Addis Ababa", "Bahir Dar", "Hawassa", "Ziway"],
            Self::Japan => &["Tokyo", "Osaka", "Nagoya", "Fukuoka", "Sapporo"],
            Self::Germany => &["Berlin", "Munich", "Hamburg", "Frankfurt", "Cologne"],
            Self::UnitedKingdom => &["London", "Manchester", "Birmingham", "Edinburgh", "Bristol"],
            Self::France => &["Paris", "Lyon", "Nice", "Bordeaux", "Marseille"],
            Self::Italy => &["Milan", "Rome", "Florence", "Bologna", "Turin"],
            Self::Spain => &["Madrid", "Barcelona", "Valencia", "Seville", "Málaga"],
            Self::Australia => &["Sydney", "Melbourne", "Brisbane", "Perth", "Adelaide"],
            Self::Canada => &["Toronto", "Vancouver", "Montreal", "Calgary", "Ottawa"],
            Self::Mexico => &["Mexico City", "Guadalajara", "Monterrey", "Puebla", "Tijuana"],
            Self::Brazil => &[
                "São Paulo",
                "Rio de Janeiro",
                "Brasília",
                "Curitiba",
                "Belo Horizonte",
            ],
            Self::China => &["Shanghai", "Beijing", "Shenzhen", "Guangzhou", "Kunming"],
            Self::India => &["Mumbai", "Delhi", "Bangalore", "Pune", "Chennai"],
            Self::Thailand => &["Bangkok", "Chiang Mai", "Phuket", "Pattaya", "Khon Kaen"],
            Self::SouthAfrica => &[
                "Cape Town",
                "Johannesburg",
                "Durban",
                "Pretoria",
                "Port Elizabeth",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    //! Covers label round trips and vocabulary sizes.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Category::ALL.len(), 10)]
    #[case(Specialty::ALL.len(), 20)]
    #[case(EmployeeRange::ALL.len(), 6)]
    #[case(BusinessType::ALL.len(), 3)]
    #[case(RevenueRange::ALL.len(), 7)]
    #[case(Certification::ALL.len(), 10)]
    #[case(Country::ALL.len(), 20)]
    fn vocabularies_have_fixed_sizes(#[case] actual: usize, #[case] expected: usize) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn every_label_parses_back_to_its_member() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(*category));
        }
        for country in Country::ALL {
            assert_eq!(country.to_string().parse::<Country>(), Ok(*country));
        }
        for revenue in RevenueRange::ALL {
            assert_eq!(revenue.as_str().parse::<RevenueRange>(), Ok(*revenue));
        }
    }

    #[rstest]
    #[case("florist")]
    #[case("Florist ")]
    #[case("")]
    fn parsing_is_exact(#[case] label: &str) {
        let result = label.parse::<Category>();
        assert_eq!(
            result,
            Err(VocabularyError::UnknownLabel {
                vocabulary: "category",
                value: label.to_owned(),
            })
        );
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&Category::ImporterExporter).expect("serialize");
        assert_eq!(json, "\"Importer/Exporter\"");

        let parsed: RevenueRange = serde_json::from_str("\"$50M+\"").expect("deserialize");
        assert_eq!(parsed, RevenueRange::Over50M);
    }

    #[test]
    fn defaults_to_first_member() {
        assert_eq!(Category::default(), Category::Florist);
        assert_eq!(Country::default(), Country::UnitedStates);
    }

    #[test]
    fn every_country_has_cities() {
        for country in Country::ALL {
            assert!(!country.cities().is_empty(), "{country} has no cities");
        }
    }
}

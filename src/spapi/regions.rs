//! SP-API selling regions and marketplace identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SP-API selling region. Each region has its own API host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// North America (US, CA, MX, BR)
    Na,
    /// Europe, Middle East, India
    #[default]
    Eu,
    /// Far East (JP, AU, SG)
    Fe,
}

impl Region {
    /// Returns the production SP-API endpoint for this region.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Region::Na => "https://sellingpartnerapi-na.amazon.com",
            Region::Eu => "https://sellingpartnerapi-eu.amazon.com",
            Region::Fe => "https://sellingpartnerapi-fe.amazon.com",
        }
    }

    /// Returns all selling regions.
    pub fn all() -> &'static [Region] {
        &[Region::Na, Region::Eu, Region::Fe]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Region::Na => "na",
            Region::Eu => "eu",
            Region::Fe => "fe",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for Region {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "na" | "north america" => Ok(Region::Na),
            "eu" | "europe" => Ok(Region::Eu),
            "fe" | "far east" => Ok(Region::Fe),
            _ => Err(RegionParseError(s.to_string())),
        }
    }
}

/// Amazon marketplaces reachable through SP-API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marketplace {
    Us,
    Ca,
    Mx,
    Br,
    Uk,
    De,
    Fr,
    It,
    Es,
    Nl,
    Be,
    Se,
    Pl,
    Tr,
    Ae,
    Sa,
    Eg,
    Za,
    In,
    Jp,
    Au,
    Sg,
}

impl Marketplace {
    /// Returns the marketplace identifier used in API requests.
    pub fn id(&self) -> &'static str {
        match self {
            Marketplace::Us => "ATVPDKIKX0DER",
            Marketplace::Ca => "A2EUQ1WTGCTBG2",
            Marketplace::Mx => "A1AM78C64UM0Y8",
            Marketplace::Br => "A2Q3Y263D00KWC",
            Marketplace::Uk => "A1F83G8C2ARO7P",
            Marketplace::De => "A1PA6795UKMFR9",
            Marketplace::Fr => "A13V1IB3VIYZZH",
            Marketplace::It => "APJ6JRA9NG5V4",
            Marketplace::Es => "A1RKKUPIHCS9HS",
            Marketplace::Nl => "A1805IZSGTT6HS",
            Marketplace::Be => "AMEN7PMS3EDWL",
            Marketplace::Se => "A2NODRKZP88ZB9",
            Marketplace::Pl => "A1C3SOZRARQ6R3",
            Marketplace::Tr => "A33AVAJ2PDY3EV",
            Marketplace::Ae => "A2VIGQ35RCS4UG",
            Marketplace::Sa => "A17E79C6D8DWNP",
            Marketplace::Eg => "ARBP9OOSHTCHU",
            Marketplace::Za => "AE08WJ6YKNBMC",
            Marketplace::In => "A21TJRUUN4KGV",
            Marketplace::Jp => "A1VC38T7YXB528",
            Marketplace::Au => "A39IBJ37TRP1C6",
            Marketplace::Sg => "A19VAU5U5O7RUS",
        }
    }

    /// Returns the selling region serving this marketplace.
    pub fn region(&self) -> Region {
        match self {
            Marketplace::Us | Marketplace::Ca | Marketplace::Mx | Marketplace::Br => Region::Na,
            Marketplace::Jp | Marketplace::Au | Marketplace::Sg => Region::Fe,
            _ => Region::Eu,
        }
    }

    /// Returns the listing currency of this marketplace.
    pub fn currency(&self) -> &'static str {
        match self {
            Marketplace::Us => "USD",
            Marketplace::Ca => "CAD",
            Marketplace::Mx => "MXN",
            Marketplace::Br => "BRL",
            Marketplace::Uk => "GBP",
            Marketplace::De
            | Marketplace::Fr
            | Marketplace::It
            | Marketplace::Es
            | Marketplace::Nl
            | Marketplace::Be => "EUR",
            Marketplace::Se => "SEK",
            Marketplace::Pl => "PLN",
            Marketplace::Tr => "TRY",
            Marketplace::Ae => "AED",
            Marketplace::Sa => "SAR",
            Marketplace::Eg => "EGP",
            Marketplace::Za => "ZAR",
            Marketplace::In => "INR",
            Marketplace::Jp => "JPY",
            Marketplace::Au => "AUD",
            Marketplace::Sg => "SGD",
        }
    }

    /// Returns the storefront domain.
    pub fn domain(&self) -> &'static str {
        match self {
            Marketplace::Us => "amazon.com",
            Marketplace::Ca => "amazon.ca",
            Marketplace::Mx => "amazon.com.mx",
            Marketplace::Br => "amazon.com.br",
            Marketplace::Uk => "amazon.co.uk",
            Marketplace::De => "amazon.de",
            Marketplace::Fr => "amazon.fr",
            Marketplace::It => "amazon.it",
            Marketplace::Es => "amazon.es",
            Marketplace::Nl => "amazon.nl",
            Marketplace::Be => "amazon.com.be",
            Marketplace::Se => "amazon.se",
            Marketplace::Pl => "amazon.pl",
            Marketplace::Tr => "amazon.com.tr",
            Marketplace::Ae => "amazon.ae",
            Marketplace::Sa => "amazon.sa",
            Marketplace::Eg => "amazon.eg",
            Marketplace::Za => "amazon.co.za",
            Marketplace::In => "amazon.in",
            Marketplace::Jp => "amazon.co.jp",
            Marketplace::Au => "amazon.com.au",
            Marketplace::Sg => "amazon.sg",
        }
    }

    /// Looks a marketplace up by its API identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.id() == id)
    }

    /// Returns all supported marketplaces.
    pub fn all() -> &'static [Marketplace] {
        &[
            Marketplace::Us,
            Marketplace::Ca,
            Marketplace::Mx,
            Marketplace::Br,
            Marketplace::Uk,
            Marketplace::De,
            Marketplace::Fr,
            Marketplace::It,
            Marketplace::Es,
            Marketplace::Nl,
            Marketplace::Be,
            Marketplace::Se,
            Marketplace::Pl,
            Marketplace::Tr,
            Marketplace::Ae,
            Marketplace::Sa,
            Marketplace::Eg,
            Marketplace::Za,
            Marketplace::In,
            Marketplace::Jp,
            Marketplace::Au,
            Marketplace::Sg,
        ]
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Marketplace::Us => "us",
            Marketplace::Ca => "ca",
            Marketplace::Mx => "mx",
            Marketplace::Br => "br",
            Marketplace::Uk => "uk",
            Marketplace::De => "de",
            Marketplace::Fr => "fr",
            Marketplace::It => "it",
            Marketplace::Es => "es",
            Marketplace::Nl => "nl",
            Marketplace::Be => "be",
            Marketplace::Se => "se",
            Marketplace::Pl => "pl",
            Marketplace::Tr => "tr",
            Marketplace::Ae => "ae",
            Marketplace::Sa => "sa",
            Marketplace::Eg => "eg",
            Marketplace::Za => "za",
            Marketplace::In => "in",
            Marketplace::Jp => "jp",
            Marketplace::Au => "au",
            Marketplace::Sg => "sg",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for Marketplace {
    type Err = MarketplaceParseError;

    /// Accepts a country code, a country name, or a raw marketplace id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(marketplace) = Self::from_id(s.trim()) {
            return Ok(marketplace);
        }

        match s.trim().to_lowercase().as_str() {
            "us" | "usa" | "united states" => Ok(Marketplace::Us),
            "ca" | "canada" => Ok(Marketplace::Ca),
            "mx" | "mexico" => Ok(Marketplace::Mx),
            "br" | "brazil" => Ok(Marketplace::Br),
            "uk" | "gb" | "united kingdom" => Ok(Marketplace::Uk),
            "de" | "germany" => Ok(Marketplace::De),
            "fr" | "france" => Ok(Marketplace::Fr),
            "it" | "italy" => Ok(Marketplace::It),
            "es" | "spain" => Ok(Marketplace::Es),
            "nl" | "netherlands" => Ok(Marketplace::Nl),
            "be" | "belgium" => Ok(Marketplace::Be),
            "se" | "sweden" => Ok(Marketplace::Se),
            "pl" | "poland" => Ok(Marketplace::Pl),
            "tr" | "turkey" => Ok(Marketplace::Tr),
            "ae" | "uae" | "united arab emirates" => Ok(Marketplace::Ae),
            "sa" | "saudi arabia" => Ok(Marketplace::Sa),
            "eg" | "egypt" => Ok(Marketplace::Eg),
            "za" | "south africa" => Ok(Marketplace::Za),
            "in" | "india" => Ok(Marketplace::In),
            "jp" | "japan" => Ok(Marketplace::Jp),
            "au" | "australia" => Ok(Marketplace::Au),
            "sg" | "singapore" => Ok(Marketplace::Sg),
            _ => Err(MarketplaceParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegionParseError(String);

impl fmt::Display for RegionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown region '{}'. Valid regions: na, eu, fe", self.0)
    }
}

impl std::error::Error for RegionParseError {}

#[derive(Debug, Clone)]
pub struct MarketplaceParseError(String);

impl fmt::Display for MarketplaceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown marketplace '{}'. Use a country code (us, uk, de, fr, ...) or a marketplace id",
            self.0
        )
    }
}

impl std::error::Error for MarketplaceParseError {}

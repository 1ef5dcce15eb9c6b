//! # Country Record
//!
//! The per-country object stored under each dataset key.
//!
//! Field types follow what the data actually contains. Nothing is
//! enforced: any field may be absent, text fields may hold sentinels, and
//! numeric fields may be text (see [`Figure`]). Keys the model does not
//! know are kept in [`CountryRecord::extra`] so a record writes back
//! everything it was read with.
//!
//! ## Lenient Loading
//!
//! Deserialization never fails for an object. Each key is offered to its
//! typed field; a value that does not fit (`"numericCode": 276`,
//! `"currency": "EUR"`), an explicit `null`, or a value that would not
//! write back unchanged is kept verbatim in `extra` instead.
//! [`CountryRecord::mistyped_fields`] lists the known keys that ended up
//! there.
//!
//! The JSON key names are camelCase (`officialName`, `isoAlpha2`, ...),
//! with one exception: `internetTLD`.

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::figure::Figure;
use crate::sentinel::{is_sentinel, known};

/// Fields every well-formed record is expected to carry.
pub const REQUIRED_FIELDS: &[&str] = &["name", "isoAlpha3", "numericCode"];

/// JSON keys with a typed field in [`CountryRecord`].
pub const FIELD_NAMES: &[&str] = &[
    "name",
    "officialName",
    "isoAlpha2",
    "isoAlpha3",
    "numericCode",
    "dialingCode",
    "countryCode",
    "capital",
    "region",
    "subregion",
    "population",
    "area",
    "currency",
    "gdp",
    "government",
    "firstLanguage",
    "otherLanguages",
    "dateFormat",
    "timeFormat",
    "timeZone",
    "drivingSide",
    "internetTLD",
    "emergencyNumbers",
    "holidays",
    "nationalAnimal",
    "nationalDish",
    "tourismHighlights",
    "majorExports",
    "majorImports",
    "lifeExpectancy",
    "literacyRate",
    "climate",
    "religions",
    "neighborCountries",
    "visaRequirement",
    "notableFacts",
];

/// Descriptive metadata for one country or territory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    // -- Identifiers ------------------------------------------------------
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_alpha2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_alpha3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_code: Option<String>,
    /// International dialing prefix, e.g. `"+33"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialing_code: Option<String>,
    /// Same meaning as `dialing_code`; some records use this key instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    // -- Geography and economy --------------------------------------------
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<Figure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gdp: Option<Gdp>,

    // -- Governance -------------------------------------------------------
    #[serde(skip_serializing_if = "Option::is_none")]
    pub government: Option<Government>,

    // -- Localization -----------------------------------------------------
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_language: Option<String>,
    /// Ordered as stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,

    // -- Miscellany -------------------------------------------------------
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driving_side: Option<String>,
    #[serde(rename = "internetTLD", skip_serializing_if = "Option::is_none")]
    pub internet_tld: Option<String>,
    /// Service name (`police`, `ambulance`, `fire`) to phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_numbers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holidays: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_animal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_dish: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tourism_highlights: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_imports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_expectancy: Option<Figure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literacy_rate: Option<Figure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub religions: Option<Vec<String>>,
    /// Alpha-2 codes of bordering countries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighbor_countries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visa_requirement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notable_facts: Option<Vec<String>>,

    /// Keys not held by the fields above, kept verbatim: unknown keys,
    /// explicit nulls and values that do not fit their field.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Land area with its unit, e.g. `{"value": 551695, "unit": "km²"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Figure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Economic output, stored as preformatted strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gdp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_capita: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Government {
    /// Form of government, e.g. "Federal parliamentary republic".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub political_lean: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heads_of_state: Option<Vec<HeadOfState>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadOfState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CountryRecord {
    /// Build a record from a JSON object. Never fails; see the module
    /// docs for where values that do not fit end up.
    pub fn from_object(object: Map<String, Value>) -> Self {
        let mut record = Self::default();
        for (key, value) in object {
            if let Some(value) = record.assign(&key, value) {
                record.extra.insert(key, value);
            }
        }
        record
    }

    /// Store `value` in the field named by `key`, or hand it back.
    fn assign(&mut self, key: &str, value: Value) -> Option<Value> {
        match key {
            "name" => fit(&mut self.name, value),
            "officialName" => fit(&mut self.official_name, value),
            "isoAlpha2" => fit(&mut self.iso_alpha2, value),
            "isoAlpha3" => fit(&mut self.iso_alpha3, value),
            "numericCode" => fit(&mut self.numeric_code, value),
            "dialingCode" => fit(&mut self.dialing_code, value),
            "countryCode" => fit(&mut self.country_code, value),
            "capital" => fit(&mut self.capital, value),
            "region" => fit(&mut self.region, value),
            "subregion" => fit(&mut self.subregion, value),
            "population" => fit(&mut self.population, value),
            "area" => fit(&mut self.area, value),
            "currency" => fit(&mut self.currency, value),
            "gdp" => fit(&mut self.gdp, value),
            "government" => fit(&mut self.government, value),
            "firstLanguage" => fit(&mut self.first_language, value),
            "otherLanguages" => fit(&mut self.other_languages, value),
            "dateFormat" => fit(&mut self.date_format, value),
            "timeFormat" => fit(&mut self.time_format, value),
            "timeZone" => fit(&mut self.time_zone, value),
            "drivingSide" => fit(&mut self.driving_side, value),
            "internetTLD" => fit(&mut self.internet_tld, value),
            "emergencyNumbers" => fit(&mut self.emergency_numbers, value),
            "holidays" => fit(&mut self.holidays, value),
            "nationalAnimal" => fit(&mut self.national_animal, value),
            "nationalDish" => fit(&mut self.national_dish, value),
            "tourismHighlights" => fit(&mut self.tourism_highlights, value),
            "majorExports" => fit(&mut self.major_exports, value),
            "majorImports" => fit(&mut self.major_imports, value),
            "lifeExpectancy" => fit(&mut self.life_expectancy, value),
            "literacyRate" => fit(&mut self.literacy_rate, value),
            "climate" => fit(&mut self.climate, value),
            "religions" => fit(&mut self.religions, value),
            "neighborCountries" => fit(&mut self.neighbor_countries, value),
            "visaRequirement" => fit(&mut self.visa_requirement, value),
            "notableFacts" => fit(&mut self.notable_facts, value),
            _ => Some(value),
        }
    }

    /// Known keys whose non-null value did not fit the field and is kept
    /// in `extra` as stored.
    pub fn mistyped_fields(&self) -> Vec<&'static str> {
        FIELD_NAMES
            .iter()
            .copied()
            .filter(|field| self.extra.get(*field).is_some_and(|v| !v.is_null()))
            .collect()
    }

    /// Best available name: `name`, then `officialName`, skipping
    /// sentinels, then `isoAlpha2`.
    ///
    /// The code is taken as-is: `"NA"` is Namibia, not a placeholder.
    pub fn display_name(&self) -> Option<&str> {
        known(self.name.as_deref())
            .or_else(|| known(self.official_name.as_deref()))
            .or_else(|| self.iso_alpha2.as_deref().filter(|c| !c.trim().is_empty()))
    }

    /// Dialing prefix from whichever key the record uses.
    pub fn dialing_code(&self) -> Option<&str> {
        self.dialing_code
            .as_deref()
            .or(self.country_code.as_deref())
    }

    /// Currency code, if present and not a sentinel.
    pub fn currency_code(&self) -> Option<&str> {
        known(self.currency.as_ref().and_then(|c| c.code.as_deref()))
    }

    /// Neighbor codes, empty when the field is absent.
    pub fn neighbors(&self) -> &[String] {
        self.neighbor_countries.as_deref().unwrap_or(&[])
    }

    /// Names of [`REQUIRED_FIELDS`] that are absent, null or blank.
    ///
    /// Sentinels do not count as missing here; they are reported by
    /// [`CountryRecord::sentinel_fields`]. Neither do mistyped values,
    /// which are reported by [`CountryRecord::mistyped_fields`].
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let values = [
            ("name", self.name.as_deref()),
            ("isoAlpha3", self.iso_alpha3.as_deref()),
            ("numericCode", self.numeric_code.as_deref()),
        ];
        let mistyped = self.mistyped_fields();
        values
            .into_iter()
            .filter(|(field, v)| match v {
                Some(s) => s.trim().is_empty(),
                None => !mistyped.contains(field),
            })
            .map(|(field, _)| field)
            .collect()
    }

    /// Names of text and figure fields whose value is a sentinel.
    ///
    /// Nested fields use dotted names (`currency.code`). Blank strings are
    /// reported here too. `isoAlpha2` is not scanned, since `"NA"` is a
    /// real code there; it is checked against the dataset key instead.
    pub fn sentinel_fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = self
            .text_fields()
            .into_iter()
            .filter_map(|(field, value)| value.filter(|v| is_sentinel(v)).map(|_| field))
            .collect();

        let figures = [
            ("population", self.population.as_ref()),
            ("lifeExpectancy", self.life_expectancy.as_ref()),
            ("literacyRate", self.literacy_rate.as_ref()),
            ("area.value", self.area.as_ref().and_then(|a| a.value.as_ref())),
        ];
        fields.extend(
            figures
                .into_iter()
                .filter(|(_, f)| f.is_some_and(Figure::is_sentinel))
                .map(|(field, _)| field),
        );
        fields
    }

    fn text_fields(&self) -> Vec<(&'static str, Option<&str>)> {
        let currency = self.currency.as_ref();
        let government = self.government.as_ref();
        let gdp = self.gdp.as_ref();
        vec![
            ("name", self.name.as_deref()),
            ("officialName", self.official_name.as_deref()),
            ("isoAlpha3", self.iso_alpha3.as_deref()),
            ("numericCode", self.numeric_code.as_deref()),
            ("dialingCode", self.dialing_code.as_deref()),
            ("countryCode", self.country_code.as_deref()),
            ("capital", self.capital.as_deref()),
            ("region", self.region.as_deref()),
            ("subregion", self.subregion.as_deref()),
            ("currency.code", currency.and_then(|c| c.code.as_deref())),
            ("currency.symbol", currency.and_then(|c| c.symbol.as_deref())),
            ("currency.name", currency.and_then(|c| c.name.as_deref())),
            ("gdp.nominal", gdp.and_then(|g| g.nominal.as_deref())),
            ("gdp.perCapita", gdp.and_then(|g| g.per_capita.as_deref())),
            ("government.type", government.and_then(|g| g.kind.as_deref())),
            (
                "government.politicalLean",
                government.and_then(|g| g.political_lean.as_deref()),
            ),
            ("firstLanguage", self.first_language.as_deref()),
            ("dateFormat", self.date_format.as_deref()),
            ("timeFormat", self.time_format.as_deref()),
            ("timeZone", self.time_zone.as_deref()),
            ("drivingSide", self.driving_side.as_deref()),
            ("internetTLD", self.internet_tld.as_deref()),
            ("nationalAnimal", self.national_animal.as_deref()),
            ("nationalDish", self.national_dish.as_deref()),
            ("climate", self.climate.as_deref()),
            ("visaRequirement", self.visa_requirement.as_deref()),
        ]
    }
}

impl<'de> Deserialize<'de> for CountryRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_object(object))
    }
}

/// Fill `slot` from `value` if it deserializes and writes back as the
/// same JSON. Otherwise return the value untouched.
fn fit<T: Serialize + DeserializeOwned>(slot: &mut Option<T>, value: Value) -> Option<Value> {
    if value.is_null() {
        return Some(value);
    }
    match T::deserialize(&value) {
        Ok(typed) if serde_json::to_value(&typed).is_ok_and(|v| v == value) => {
            *slot = Some(typed);
            None
        }
        _ => Some(value),
    }
}

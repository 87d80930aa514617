use super::domain::{Category, UnknownCategory};
use super::filter::FilterCriteria;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw filter form state as submitted by a client, before sanitizing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub checkin: Option<String>,
    #[serde(default)]
    pub checkout: Option<String>,
    #[serde(default)]
    pub guests: Option<u16>,
    #[serde(default)]
    pub max_price: Option<u32>,
    #[serde(default, alias = "villa_types")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StayDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayDates {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Sanitized input: the criteria to evaluate plus the requested stay, if any.
/// Stay dates are validated but do not restrict the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSubmission {
    pub criteria: FilterCriteria,
    pub stay: Option<StayDates>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterInputError {
    #[error("{field} '{value}' is not a YYYY-MM-DD date")]
    InvalidDate { field: &'static str, value: String },
    #[error("both check-in and check-out dates are required for a stay")]
    IncompleteStay,
    #[error("check-out {check_out} must fall after check-in {check_in}")]
    EmptyStay {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
    #[error("guest count must be at least 1")]
    ZeroGuests,
}

impl FilterRequest {
    pub fn into_submission(self) -> Result<FilterSubmission, FilterInputError> {
        let stay = parse_stay(self.checkin.as_deref(), self.checkout.as_deref())?;

        if self.guests == Some(0) {
            return Err(FilterInputError::ZeroGuests);
        }

        let categories = self
            .categories
            .iter()
            .map(|raw| raw.parse::<Category>())
            .collect::<Result<_, _>>()?;

        let criteria = FilterCriteria {
            location: self
                .location
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            guests: self.guests,
            max_price: self.max_price,
            categories,
            amenities: clean_tags(self.amenities),
            activities: clean_tags(self.activities),
        };

        Ok(FilterSubmission { criteria, stay })
    }
}

fn clean_tags<C: FromIterator<String>>(tags: Vec<String>) -> C {
    tags.into_iter()
        .map(|tag| tag.trim().to_ascii_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
}

fn parse_optional_date(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, FilterInputError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => parse_date(value)
            .map(Some)
            .map_err(|_| FilterInputError::InvalidDate {
                field,
                value: value.to_string(),
            }),
    }
}

fn parse_stay(
    checkin: Option<&str>,
    checkout: Option<&str>,
) -> Result<Option<StayDates>, FilterInputError> {
    let check_in = parse_optional_date("check-in", checkin)?;
    let check_out = parse_optional_date("check-out", checkout)?;

    match (check_in, check_out) {
        (None, None) => Ok(None),
        (Some(check_in), Some(check_out)) if check_out > check_in => Ok(Some(StayDates {
            check_in,
            check_out,
        })),
        (Some(check_in), Some(check_out)) => Err(FilterInputError::EmptyStay {
            check_in,
            check_out,
        }),
        _ => Err(FilterInputError::IncompleteStay),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_yields_default_criteria() {
        let request = FilterRequest {
            location: Some("   ".to_string()),
            checkin: Some(String::new()),
            checkout: Some(String::new()),
            ..FilterRequest::default()
        };
        let submission = request.into_submission().expect("blank form is valid");
        assert_eq!(submission.criteria, FilterCriteria::default());
        assert!(submission.stay.is_none());
    }

    #[test]
    fn parses_categories_and_tags() {
        let request = FilterRequest {
            location: Some(" Tulum ".to_string()),
            guests: Some(4),
            max_price: Some(3000),
            categories: vec!["beachfront".to_string(), "city".to_string()],
            amenities: vec!["Infinity-Pool".to_string(), " ".to_string()],
            activities: vec!["diving".to_string()],
            ..FilterRequest::default()
        };

        let criteria = request.into_submission().expect("valid form").criteria;

        assert_eq!(criteria.location.as_deref(), Some("Tulum"));
        assert_eq!(criteria.guest_minimum(), 4);
        assert_eq!(criteria.max_price, Some(3000));
        assert!(criteria.categories.contains(&Category::City));
        assert_eq!(
            criteria.amenities.into_iter().collect::<Vec<_>>(),
            vec!["infinity-pool".to_string()]
        );
    }

    #[test]
    fn accepts_a_valid_stay() {
        let request = FilterRequest {
            checkin: Some("2025-12-20".to_string()),
            checkout: Some("2025-12-27".to_string()),
            ..FilterRequest::default()
        };
        let stay = request
            .into_submission()
            .expect("valid stay")
            .stay
            .expect("stay present");
        assert_eq!(stay.nights(), 7);
    }

    #[test]
    fn rejects_reversed_stay() {
        let request = FilterRequest {
            checkin: Some("2025-12-27".to_string()),
            checkout: Some("2025-12-20".to_string()),
            ..FilterRequest::default()
        };
        assert!(matches!(
            request.into_submission(),
            Err(FilterInputError::EmptyStay { .. })
        ));
    }

    #[test]
    fn rejects_half_a_stay() {
        let request = FilterRequest {
            checkin: Some("2025-12-27".to_string()),
            ..FilterRequest::default()
        };
        assert_eq!(
            request.into_submission(),
            Err(FilterInputError::IncompleteStay)
        );
    }

    #[test]
    fn rejects_malformed_date() {
        let request = FilterRequest {
            checkin: Some("27/12/2025".to_string()),
            checkout: Some("2025-12-30".to_string()),
            ..FilterRequest::default()
        };
        assert!(matches!(
            request.into_submission(),
            Err(FilterInputError::InvalidDate {
                field: "check-in",
                ..
            })
        ));
    }

    #[test]
    fn parse_date_accepts_padded_iso_dates_only() {
        assert_eq!(
            parse_date(" 2025-12-20 "),
            Ok(NaiveDate::from_ymd_opt(2025, 12, 20).expect("valid date"))
        );
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("20/12/2025").is_err());
    }

    #[test]
    fn rejects_unknown_category_and_zero_guests() {
        let request = FilterRequest {
            categories: vec!["castle".to_string()],
            ..FilterRequest::default()
        };
        assert!(matches!(
            request.into_submission(),
            Err(FilterInputError::UnknownCategory(_))
        ));

        let request = FilterRequest {
            guests: Some(0),
            ..FilterRequest::default()
        };
        assert_eq!(request.into_submission(), Err(FilterInputError::ZeroGuests));
    }
}

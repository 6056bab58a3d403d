use validator::ValidationError;

const REQUIRED_MESSAGE: &str = "This field is required";

/// Rejects empty or whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(REQUIRED_MESSAGE.into());
        return Err(err);
    }
    Ok(())
}

/// Requires at least one non-blank entry in a technology list.
pub fn non_empty_tech(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().all(|v| v.trim().is_empty()) {
        let mut err = ValidationError::new("required");
        err.message = Some("At least one technology is required".into());
        return Err(err);
    }
    Ok(())
}

/// Requires a year written as an integer, e.g. "2019".
pub fn numeric_year(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;

    if parse_year(value).is_none() {
        let mut err = ValidationError::new("numeric_year");
        err.message = Some("Start year must be a whole number such as 2019".into());
        return Err(err);
    }
    Ok(())
}

/// Best-effort integer reading of a stored year. Never rewrites the stored text.
pub fn parse_year(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// Trims list entries and drops blanks, keeping client order.
pub fn clean_tech_list<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Splits a comma-joined technology string such as "React,Node,Mongo".
pub fn split_tech(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(raw) => clean_tech_list(raw.split(',')),
        None => Vec::new(),
    }
}

/// Maps blank optional text to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

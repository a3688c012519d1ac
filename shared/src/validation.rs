//! Input validation shared between backend and client

/// Validate and normalize a free-text city name
///
/// Returns the trimmed name, or an error when the input is empty or
/// whitespace-only. The backend rejects invalid input before any provider
/// call; the client uses the same check to disable the submit button.
pub fn validate_city_name(input: &str) -> Result<&str, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("City name must not be empty");
    }
    Ok(trimmed)
}

use crate::engine::variant::VariantKind;

/// Map the upstream "main weather category" string onto an animation
/// variant. The vocabulary is the OpenWeather condition set; anything not in
/// the table falls back to a clear sky rather than erroring.
#[must_use]
pub fn variant_for_condition(code: &str) -> VariantKind {
    match code {
        "Clear" => VariantKind::Clear,
        "Clouds" => VariantKind::Cloudy,
        "Rain" | "Drizzle" => VariantKind::Rain,
        "Thunderstorm" => VariantKind::Thunder,
        "Snow" => VariantKind::Snow,
        "Mist" | "Smoke" | "Haze" | "Dust" | "Fog" | "Ash" => VariantKind::Mist,
        "Sand" | "Squall" | "Tornado" => VariantKind::Windy,
        _ => VariantKind::Clear,
    }
}

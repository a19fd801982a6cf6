use crate::chart::data::{Ascendant, Chart, Nakshatra, Planet, PlanetPosition, Rashi};
use crate::chart::style::ChartStyle;
use crate::error::{ChartError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One body as the chart service sends it.
#[derive(Debug, Clone, Deserialize)]
struct BodyDto {
    longitude: f64,
    #[serde(default)]
    rashi: Rashi,
    #[serde(default)]
    nakshatra: Option<Nakshatra>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChartDto {
    lagna: Option<BodyDto>,
    /// Kept untyped so bodies outside the nine are dropped before their
    /// fields are looked at.
    #[serde(default)]
    planets: Map<String, Value>,
    #[serde(default, alias = "style")]
    astro_style: Option<Value>,
}

/// Load a chart from the chart service's JSON.
///
/// Accepts either the bare chart object or the `{ "success": .., "chart": .. }`
/// response envelope.
pub fn load_chart_from_json(json: &str) -> Result<Chart> {
    let parsed: Value =
        serde_json::from_str(json).map_err(|e| ChartError::InvalidJson(e.to_string()))?;
    load_chart_from_value(parsed)
}

pub fn load_chart_from_value(value: Value) -> Result<Chart> {
    let chart_value = unwrap_envelope(value)?;
    validate_chart_value(&chart_value)?;

    let dto: ChartDto = serde_json::from_value(chart_value)
        .map_err(|e| ChartError::InvalidJson(e.to_string()))?;
    chart_from_dto(dto)
}

fn unwrap_envelope(value: Value) -> Result<Value> {
    let Value::Object(mut obj) = value else {
        return Err(ChartError::InvalidJson(
            "chart data must be an object".to_string(),
        ));
    };

    if !obj.contains_key("success") {
        return Ok(Value::Object(obj));
    }

    if obj.get("success").and_then(Value::as_bool) != Some(true) {
        let message = obj
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error occurred")
            .to_string();
        return Err(ChartError::Backend(message));
    }

    obj.remove("chart")
        .ok_or_else(|| ChartError::InvalidJson("response has no chart".to_string()))
}

/// Structural checks before typed deserialization, so failures name the
/// offending field.
fn validate_chart_value(value: &Value) -> Result<()> {
    let obj = value
        .as_object()
        .ok_or_else(|| ChartError::InvalidJson("chart must be an object".to_string()))?;

    match obj.get("lagna") {
        None | Some(Value::Null) => return Err(ChartError::MissingAscendant),
        Some(lagna) => validate_body("lagna", lagna)?,
    }

    let planets = obj
        .get("planets")
        .ok_or_else(|| ChartError::MissingPlanets(all_planet_names()))?;
    let planets = planets
        .as_object()
        .ok_or_else(|| ChartError::InvalidJson("planets must be an object".to_string()))?;
    for (name, body) in planets {
        if name.parse::<Planet>().is_ok() {
            validate_body(name, body)?;
        }
    }

    Ok(())
}

fn validate_body(name: &str, body: &Value) -> Result<()> {
    let obj: &Map<String, Value> = body
        .as_object()
        .ok_or_else(|| ChartError::InvalidJson(format!("{} must be an object", name)))?;

    match obj.get("longitude") {
        Some(lon) if lon.is_number() => {}
        Some(_) => {
            return Err(ChartError::InvalidJson(format!(
                "{}.longitude must be a number",
                name
            )))
        }
        None => {
            return Err(ChartError::InvalidJson(format!(
                "{}.longitude is required",
                name
            )))
        }
    }

    if let Some(rashi) = obj.get("rashi") {
        if !rashi.is_object() {
            return Err(ChartError::InvalidJson(format!(
                "{}.rashi must be an object",
                name
            )));
        }
    }

    Ok(())
}

fn chart_from_dto(dto: ChartDto) -> Result<Chart> {
    let lagna = dto.lagna.ok_or(ChartError::MissingAscendant)?;
    let ascendant = Ascendant {
        longitude: lagna.longitude,
        rashi: lagna.rashi,
        nakshatra: lagna.nakshatra,
    };

    let mut positions = Vec::with_capacity(Planet::ALL.len());
    for (key, body) in dto.planets {
        let Ok(planet) = key.parse::<Planet>() else {
            log::warn!("Ignoring unknown body {:?} in chart data", key);
            continue;
        };
        let body: BodyDto = serde_json::from_value(body)
            .map_err(|e| ChartError::InvalidJson(format!("{}: {}", key, e)))?;
        positions.push(PlanetPosition {
            planet,
            longitude: body.longitude,
            rashi: body.rashi,
            nakshatra: body.nakshatra,
        });
    }

    let style = match dto.astro_style {
        None | Some(Value::Null) => ChartStyle::default(),
        Some(Value::String(tag)) => ChartStyle::from_tag_or_default(Some(tag.as_str())),
        Some(other) => ChartStyle::from_tag_or_default(Some(other.to_string().as_str())),
    };
    Chart::new(ascendant, positions, style)
}

fn all_planet_names() -> Vec<String> {
    Planet::ALL.iter().map(|p| p.name().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            load_chart_from_json("[1, 2]"),
            Err(ChartError::InvalidJson(_))
        ));
        assert!(matches!(
            load_chart_from_json("{ not json"),
            Err(ChartError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_missing_lagna() {
        let result = load_chart_from_json(r#"{ "planets": {} }"#);
        assert!(matches!(result, Err(ChartError::MissingAscendant)));

        let result = load_chart_from_json(r#"{ "lagna": null, "planets": {} }"#);
        assert!(matches!(result, Err(ChartError::MissingAscendant)));
    }

    #[test]
    fn test_backend_failure_envelope() {
        let result = load_chart_from_json(r#"{ "success": false, "error": "bad date" }"#);
        match result {
            Err(ChartError::Backend(msg)) => assert_eq!(msg, "bad date"),
            other => panic!("Expected Backend error, got {:?}", other),
        }
    }

    #[test]
    fn test_longitude_must_be_number() {
        let json = r#"{ "lagna": { "longitude": "five" }, "planets": {} }"#;
        match load_chart_from_json(json) {
            Err(ChartError::InvalidJson(msg)) => assert!(msg.contains("lagna.longitude")),
            other => panic!("Expected InvalidJson, got {:?}", other),
        }
    }

    fn bodies() -> String {
        Planet::ALL
            .iter()
            .map(|p| format!(r#""{}": {{ "longitude": 10.0, "rashi": {{ "name": "Aries" }} }}"#, p))
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[test]
    fn test_non_string_style_falls_back() {
        for style in ["5", "true", r#"{ "name": "kp" }"#, "null"] {
            let json = format!(
                r#"{{ "astro_style": {}, "lagna": {{ "longitude": 5.0 }}, "planets": {{ {} }} }}"#,
                style,
                bodies()
            );
            let chart = load_chart_from_json(&json).unwrap();
            assert_eq!(chart.style, ChartStyle::NorthIndian);
        }
    }

    #[test]
    fn test_malformed_unknown_body_is_ignored() {
        let json = format!(
            r#"{{ "lagna": {{ "longitude": 5.0 }}, "planets": {{ {}, "Uranus": {{ "longitude": null }}, "Pluto": 7 }} }}"#,
            bodies()
        );
        let chart = load_chart_from_json(&json).unwrap();
        assert_eq!(chart.planets.len(), 9);
    }

    #[test]
    fn test_malformed_known_body_is_rejected() {
        let json = format!(
            r#"{{ "lagna": {{ "longitude": 5.0 }}, "planets": {{ {}, "Mars": {{ "longitude": null }} }} }}"#,
            bodies().replace(r#""Mars": { "longitude": 10.0, "rashi": { "name": "Aries" } }, "#, "")
        );
        match load_chart_from_json(&json) {
            Err(ChartError::InvalidJson(msg)) => assert!(msg.contains("Mars.longitude")),
            other => panic!("Expected InvalidJson, got {:?}", other),
        }
    }
}

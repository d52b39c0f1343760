//! Capability spec strings: `skill:level` pairs joined by commas, e.g. `java:9,sql:7`.

use std::collections::BTreeMap;

use super::domain::ProficiencyLevel;
use super::error::RegistryError;

const PAIR_SEPARATOR: char = ',';
const LEVEL_SEPARATOR: char = ':';

/// Parses a capability spec, checking each pair in order for shape, skill, then level.
///
/// `is_known` decides whether a skill name is registered. A blank spec yields no capabilities,
/// and a skill listed twice keeps its last level.
pub fn parse_capabilities<F>(
    spec: &str,
    is_known: F,
) -> Result<BTreeMap<String, ProficiencyLevel>, RegistryError>
where
    F: Fn(&str) -> bool,
{
    let mut capabilities = BTreeMap::new();
    let spec = spec.trim();
    if spec.is_empty() {
        return Ok(capabilities);
    }

    for pair in spec.split(PAIR_SEPARATOR) {
        let (skill, raw_level) = split_pair(pair)?;
        if !is_known(skill) {
            return Err(RegistryError::UnknownSkill {
                skill: skill.to_string(),
            });
        }
        let level = parse_level(skill, raw_level)?;
        capabilities.insert(skill.to_string(), level);
    }

    Ok(capabilities)
}

/// Canonical form: pairs sorted by skill name. Parses back to the same mapping.
pub fn format_capabilities(capabilities: &BTreeMap<String, ProficiencyLevel>) -> String {
    capabilities
        .iter()
        .map(|(skill, level)| format!("{skill}{LEVEL_SEPARATOR}{level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn split_pair(pair: &str) -> Result<(&str, &str), RegistryError> {
    let trimmed = pair.trim();
    let mut parts = trimmed.split(LEVEL_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(skill), Some(level), None) => {
            let (skill, level) = (skill.trim(), level.trim());
            if skill.is_empty() || level.is_empty() {
                Err(RegistryError::MalformedCapability {
                    pair: trimmed.to_string(),
                    reason: "skill and level must both be present",
                })
            } else {
                Ok((skill, level))
            }
        }
        _ => Err(RegistryError::MalformedCapability {
            pair: trimmed.to_string(),
            reason: "expected exactly one ':' between skill and level",
        }),
    }
}

fn parse_level(skill: &str, raw: &str) -> Result<ProficiencyLevel, RegistryError> {
    raw.parse::<i64>()
        .ok()
        .and_then(|value| ProficiencyLevel::try_from(value).ok())
        .ok_or_else(|| RegistryError::InvalidLevel {
            skill: skill.to_string(),
            level: raw.to_string(),
        })
}

// src/model/elements.rs

use serde::{Deserialize, Serialize};

/// Maximum electron occupancy per shell index in the simplified Bohr model.
pub const SHELL_CAPACITY: [u32; 6] = [2, 8, 18, 32, 18, 8];

/// Display facts shown in the fact sheet (free text, no invariants).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElementFacts {
    pub discharge_formula: String,
    pub chemistry: String,
    pub thermal: String,
    pub electrical: String,
    pub ewaste: String,
}

/// Static description of one chemical element, immutable after construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElementProfile {
    pub name: String,
    pub symbol: String,
    pub protons: u32,
    pub neutrons: u32,
    // Electron occupancy per shell, innermost first.
    pub shells: Vec<u32>,
    pub facts: ElementFacts,
}

impl ElementProfile {
    /// Builds a profile after checking the shell invariants:
    /// non-empty, every occupancy >= 1 and within the Bohr capacity for its
    /// index, and occupancies summing to the electron count (neutral atom,
    /// so equal to `protons`).
    pub fn new(
        name: &str,
        symbol: &str,
        protons: u32,
        neutrons: u32,
        shells: Vec<u32>,
        facts: ElementFacts,
    ) -> Result<Self, String> {
        if protons == 0 {
            return Err(format!("{}: proton count must be positive", symbol));
        }
        let profile = Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            protons,
            neutrons,
            shells,
            facts,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.shells.is_empty() {
            return Err(format!("{}: shell list is empty", self.symbol));
        }
        if self.shells.len() > SHELL_CAPACITY.len() {
            return Err(format!(
                "{}: {} shells exceeds the {} supported by the Bohr capacity table",
                self.symbol,
                self.shells.len(),
                SHELL_CAPACITY.len()
            ));
        }
        for (i, &n) in self.shells.iter().enumerate() {
            if n == 0 {
                return Err(format!("{}: shell {} has zero electrons", self.symbol, i));
            }
            if n > SHELL_CAPACITY[i] {
                return Err(format!(
                    "{}: shell {} holds {} electrons, capacity is {}",
                    self.symbol, i, n, SHELL_CAPACITY[i]
                ));
            }
        }
        let total: u32 = self.shells.iter().sum();
        if total != self.protons {
            return Err(format!(
                "{}: shells sum to {} electrons but the neutral atom has {}",
                self.symbol, total, self.protons
            ));
        }
        Ok(())
    }

    pub fn electron_count(&self) -> u32 {
        self.shells.iter().sum()
    }

    pub fn mass_number(&self) -> u32 {
        self.protons + self.neutrons
    }

    /// Plain-text fact sheet for console display.
    pub fn fact_sheet(&self) -> String {
        let shells: Vec<String> = self.shells.iter().map(|n| n.to_string()).collect();
        format!(
            "{} ({})\n\
             Z = {}, N = {}, A = {}\n\
             Shell configuration: {}\n\n\
             Discharge formula:\n  {}\n\n\
             Battery chemistry:\n  {}\n\n\
             Thermal:\n  {}\n\n\
             Electrical:\n  {}\n\n\
             E-waste:\n  {}",
            self.name,
            self.symbol,
            self.protons,
            self.neutrons,
            self.mass_number(),
            shells.join("-"),
            self.facts.discharge_formula,
            self.facts.chemistry,
            self.facts.thermal,
            self.facts.electrical,
            self.facts.ewaste
        )
    }
}

/// Symbols with a built-in profile, in display order.
pub fn available_elements() -> &'static [&'static str] {
    &["Li", "Pb"]
}

/// Returns the built-in profile for a symbol (case-sensitive, e.g. "Li").
pub fn get_profile(symbol: &str) -> Option<ElementProfile> {
    match symbol {
        "Li" => Some(ElementProfile {
            name: "Lithium".into(),
            symbol: "Li".into(),
            protons: 3,
            neutrons: 4, // Li-7
            shells: vec![2, 1],
            facts: ElementFacts {
                discharge_formula: "Li → Li⁺ + e⁻".into(),
                chemistry: "Lithium is highly reactive and loses 1 electron easily, \
                            forming Li⁺ ions. In lithium-ion cells these ions shuttle \
                            between the electrodes during charge and discharge."
                    .into(),
                thermal: "Melting point 180.5 °C, boiling point 1342 °C, \
                          thermal conductivity 84.8 W/(m·K)."
                    .into(),
                electrical: "Electrical conductivity ≈ 1.1 × 10⁷ S/m; \
                             the lightest metal and the least dense solid element."
                    .into(),
                ewaste: "Spent lithium cells must not go to landfill: thermal runaway \
                         risk and recoverable Li/Co content. Collection rates remain \
                         low compared to lead-acid."
                    .into(),
            },
        }),
        "Pb" => Some(ElementProfile {
            name: "Lead".into(),
            symbol: "Pb".into(),
            protons: 82,
            neutrons: 125, // Pb-207
            shells: vec![2, 8, 18, 32, 18, 4],
            facts: ElementFacts {
                discharge_formula: "PbO₂ + Pb + 2H₂SO₄ → 2PbSO₄ + 2H₂O".into(),
                chemistry: "Lead is used in lead-acid batteries. The Pb and PbO₂ \
                            electrodes react with sulfuric acid to produce electricity, \
                            cycling between the Pb²⁺ and Pb⁴⁺ oxidation states."
                    .into(),
                thermal: "Melting point 327.5 °C, boiling point 1749 °C, \
                          thermal conductivity 35.3 W/(m·K)."
                    .into(),
                electrical: "Electrical conductivity ≈ 4.8 × 10⁶ S/m; \
                             a poor conductor for a metal, but cheap and corrosion-resistant."
                    .into(),
                ewaste: "Lead is a toxic heavy metal; however lead-acid batteries are \
                         among the most recycled consumer products, with collection \
                         rates near 99% in most markets."
                    .into(),
            },
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_valid() {
        for sym in available_elements() {
            let p = get_profile(sym).expect("missing builtin");
            p.validate().expect("builtin profile failed validation");
            assert_eq!(p.electron_count(), p.protons);
        }
    }

    #[test]
    fn test_lithium_shells() {
        let li = get_profile("Li").unwrap();
        assert_eq!(li.shells, vec![2, 1]);
        assert_eq!(li.mass_number(), 7);
    }

    #[test]
    fn test_unknown_symbol() {
        assert!(get_profile("Xx").is_none());
        assert!(get_profile("li").is_none()); // case-sensitive
    }

    #[test]
    fn test_rejects_empty_shells() {
        let facts = get_profile("Li").unwrap().facts;
        let res = ElementProfile::new("Bogus", "Bo", 3, 4, vec![], facts);
        assert!(res.is_err());
    }

    #[test]
    fn test_rejects_zero_occupancy() {
        let facts = get_profile("Li").unwrap().facts;
        let res = ElementProfile::new("Bogus", "Bo", 2, 2, vec![2, 0], facts);
        assert!(res.unwrap_err().contains("zero electrons"));
    }

    #[test]
    fn test_rejects_over_capacity() {
        let facts = get_profile("Li").unwrap().facts;
        // Shell 0 holds at most 2 electrons
        let res = ElementProfile::new("Bogus", "Bo", 3, 4, vec![3], facts);
        assert!(res.unwrap_err().contains("capacity"));
    }

    #[test]
    fn test_rejects_electron_mismatch() {
        let facts = get_profile("Li").unwrap().facts;
        // 3 protons but only 2 electrons placed
        let res = ElementProfile::new("Bogus", "Bo", 3, 4, vec![2], facts);
        assert!(res.unwrap_err().contains("neutral atom"));
    }

    #[test]
    fn test_fact_sheet_mentions_formula() {
        let pb = get_profile("Pb").unwrap();
        let sheet = pb.fact_sheet();
        assert!(sheet.contains("PbSO₄"));
        assert!(sheet.contains("2-8-18-32-18-4"));
    }
}

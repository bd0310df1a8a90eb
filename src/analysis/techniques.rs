use serde::Serialize;

use crate::error::AnalyzerError;
use crate::knowledge::KnowledgeLookup;
use crate::model::Recipe;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechniqueDetail {
    pub name: String,
    pub description: String,
    pub tips: Vec<String>,
    pub equipment: Vec<String>,
}

/// Techniques spotted in the instructions and the equipment they need
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechniqueReport {
    pub techniques: Vec<TechniqueDetail>,
    pub equipment_needed: Vec<String>,
}

/// Every known technique name contained in a step is recorded, step by step
pub(super) fn analyze(
    recipe: &Recipe,
    knowledge: &dyn KnowledgeLookup,
) -> Result<TechniqueReport, AnalyzerError> {
    let mut report = TechniqueReport {
        techniques: Vec::new(),
        equipment_needed: Vec::new(),
    };

    if recipe.instructions.is_empty() {
        return Ok(report);
    }

    let names = knowledge.technique_names()?;

    for step in &recipe.instructions {
        let step_lower = step.to_lowercase();

        for name in names.iter().filter(|name| step_lower.contains(name.as_str())) {
            // Listed names without an entry are skipped
            let Some(entry) = knowledge.get_technique(name)? else {
                continue;
            };

            report.equipment_needed.extend(entry.equipment.iter().cloned());
            report.techniques.push(TechniqueDetail {
                name: name.clone(),
                description: entry.description,
                tips: entry.tips,
                equipment: entry.equipment,
            });
        }
    }

    Ok(report)
}

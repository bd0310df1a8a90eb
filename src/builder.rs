use serde::Serialize;
use std::sync::Arc;

use crate::analysis::{
    analyze, cooking_tips, recipe_suggestions, AnalysisMode, AnalysisReport, SuggestionContext,
    UserPreferences,
};
use crate::config::AnalyzerConfig;
use crate::knowledge::{InMemoryKnowledge, KnowledgeLookup};
use crate::model::Recipe;
use crate::parser::RecipeParser;
use crate::AnalyzerError;

/// Represents the desired output
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputMode {
    /// Parse and run the requested analysis (default)
    #[default]
    Report,
    /// Return the parsed recipe without analysis
    Recipe,
}

/// Result of an analysis request
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    /// Parsed recipe together with the requested report
    Report {
        recipe: Recipe,
        report: AnalysisReport,
    },
    /// Parsed recipe only
    Recipe(Recipe),
}

impl AnalysisResult {
    /// Pretty-printed JSON for the result
    pub fn to_json(&self) -> Result<String, AnalyzerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builder for configuring and executing a recipe analysis
#[derive(Default)]
pub struct RecipeAnalyzerBuilder {
    text: Option<String>,
    analysis_type: Option<String>,
    mode: OutputMode,
    knowledge: Option<Arc<dyn KnowledgeLookup>>,
    config: Option<AnalyzerConfig>,
}

impl RecipeAnalyzerBuilder {
    /// Set the recipe text to analyze
    ///
    /// # Example
    /// ```
    /// use recipe_analyzer::RecipeAnalyzer;
    ///
    /// let builder = RecipeAnalyzer::builder()
    ///     .text("Ingredients:\n2 cups flour\nInstructions:\n1. Mix");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the analysis type ("general", "ingredients", "techniques" or
    /// "nutrition"). Unknown names produce a general report.
    ///
    /// # Example
    /// ```
    /// use recipe_analyzer::RecipeAnalyzer;
    ///
    /// let builder = RecipeAnalyzer::builder()
    ///     .text("Ingredients:\n2 cups flour")
    ///     .analysis_type("nutrition");
    /// ```
    pub fn analysis_type(mut self, analysis_type: impl Into<String>) -> Self {
        self.analysis_type = Some(analysis_type.into());
        self
    }

    /// Set output mode to parse only (no analysis)
    ///
    /// # Example
    /// ```
    /// use recipe_analyzer::RecipeAnalyzer;
    ///
    /// let builder = RecipeAnalyzer::builder()
    ///     .text("Ingredients:\n2 cups flour")
    ///     .parse_only();
    /// ```
    pub fn parse_only(mut self) -> Self {
        self.mode = OutputMode::Recipe;
        self
    }

    /// Set the knowledge source used for ingredient and technique lookups
    ///
    /// Defaults to [`InMemoryKnowledge::basic`].
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use recipe_analyzer::{InMemoryKnowledge, RecipeAnalyzer};
    ///
    /// let builder = RecipeAnalyzer::builder()
    ///     .text("Ingredients:\n2 cups flour")
    ///     .knowledge(Arc::new(InMemoryKnowledge::new()));
    /// ```
    pub fn knowledge(mut self, knowledge: Arc<dyn KnowledgeLookup>) -> Self {
        self.knowledge = Some(knowledge);
        self
    }

    /// Set the analyzer configuration
    ///
    /// Defaults to [`AnalyzerConfig::default`].
    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build and execute the analysis
    ///
    /// # Errors
    /// Returns `AnalyzerError` if:
    /// - No recipe text was specified
    /// - The knowledge source fails during the analysis
    ///
    /// # Example
    /// ```
    /// # use recipe_analyzer::{AnalysisResult, RecipeAnalyzer};
    /// let result = RecipeAnalyzer::builder()
    ///     .text("Ingredients:\n2 cups flour\nInstructions:\n1. Mix")
    ///     .build()
    ///     .unwrap();
    ///
    /// match result {
    ///     AnalysisResult::Report { recipe, .. } => assert_eq!(recipe.ingredients.len(), 1),
    ///     AnalysisResult::Recipe(_) => unreachable!(),
    /// }
    /// ```
    pub fn build(self) -> Result<AnalysisResult, AnalyzerError> {
        let text = self.text.ok_or_else(|| {
            AnalyzerError::BuilderError("No recipe text specified. Use .text()".to_string())
        })?;
        let config = self.config.unwrap_or_default();

        let recipe = RecipeParser::with_config(&config.classifier).parse(&text);

        match self.mode {
            OutputMode::Recipe => Ok(AnalysisResult::Recipe(recipe)),
            OutputMode::Report => {
                let mode = AnalysisMode::from_name(
                    self.analysis_type
                        .as_deref()
                        .unwrap_or(&config.analysis.default_mode),
                );
                let knowledge = self
                    .knowledge
                    .unwrap_or_else(|| Arc::new(InMemoryKnowledge::basic()));

                let report = analyze(&recipe, mode, knowledge.as_ref())?;
                Ok(AnalysisResult::Report { recipe, report })
            }
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeAnalyzer;

impl RecipeAnalyzer {
    /// Creates a new builder for analyzing recipes
    ///
    /// # Example
    /// ```
    /// use recipe_analyzer::RecipeAnalyzer;
    ///
    /// let builder = RecipeAnalyzer::builder();
    /// ```
    pub fn builder() -> RecipeAnalyzerBuilder {
        RecipeAnalyzerBuilder::default()
    }

    /// Recipe ideas capped at `analysis.max_suggestions`
    pub fn suggestions(
        config: &AnalyzerConfig,
        context: &SuggestionContext,
        preferences: &UserPreferences,
    ) -> Vec<String> {
        recipe_suggestions(context, preferences, config.analysis.max_suggestions)
    }

    /// Cooking tips capped at `analysis.max_tips`
    ///
    /// # Example
    /// ```
    /// use recipe_analyzer::{AnalyzerConfig, InMemoryKnowledge, RecipeAnalyzer};
    ///
    /// let tips = RecipeAnalyzer::tips(
    ///     &AnalyzerConfig::default(),
    ///     Some("techniques"),
    ///     &InMemoryKnowledge::basic(),
    /// )
    /// .unwrap();
    /// assert_eq!(tips.len(), 6);
    /// ```
    pub fn tips(
        config: &AnalyzerConfig,
        category: Option<&str>,
        knowledge: &dyn KnowledgeLookup,
    ) -> Result<Vec<String>, AnalyzerError> {
        cooking_tips(category, knowledge, config.analysis.max_tips)
    }
}

use std::collections::HashSet;

use crate::{
    config::Config,
    constants::variants::builtin_variants,
    errors::{AppError, AppResult},
    models::domain::VariantDescriptor,
};

/// The variant catalog served by this process. Immutable once built.
#[derive(Debug, Clone)]
pub struct VariantRegistry {
    variants: Vec<VariantDescriptor>,
    default_id: String,
}

impl VariantRegistry {
    pub fn new(variants: Vec<VariantDescriptor>, default_id: &str) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for variant in &variants {
            variant.check()?;
            if !seen.insert(variant.id.as_str()) {
                return Err(AppError::ValidationError(format!(
                    "duplicate variant id '{}'",
                    variant.id
                )));
            }
        }

        if !seen.contains(default_id) {
            return Err(AppError::ValidationError(format!(
                "default variant '{}' is not in the catalog",
                default_id
            )));
        }

        Ok(Self {
            variants,
            default_id: default_id.to_string(),
        })
    }

    pub fn builtin(default_id: &str) -> AppResult<Self> {
        Self::new(builtin_variants(), default_id)
    }

    /// Parses a JSON array of descriptors.
    pub fn from_json(json: &str, default_id: &str) -> AppResult<Self> {
        let variants: Vec<VariantDescriptor> = serde_json::from_str(json)
            .map_err(|e| AppError::ValidationError(format!("invalid variant catalog: {}", e)))?;
        Self::new(variants, default_id)
    }

    /// Loads `VARIANTS_PATH` when set, the built-in catalog otherwise.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        match &config.variants_path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    AppError::InternalError(format!("could not read variant catalog '{}': {}", path, e))
                })?;
                let registry = Self::from_json(&json, &config.default_variant)?;
                log::info!(
                    "Loaded {} variants from {}",
                    registry.variants.len(),
                    path
                );
                Ok(registry)
            }
            None => Self::builtin(&config.default_variant),
        }
    }

    pub fn get(&self, id: &str) -> AppResult<&VariantDescriptor> {
        self.variants
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Variant '{}' not found", id)))
    }

    pub fn default_variant(&self) -> &VariantDescriptor {
        self.variants
            .iter()
            .find(|v| v.id == self.default_id)
            .unwrap_or(&self.variants[0])
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    pub fn all(&self) -> &[VariantDescriptor] {
        &self.variants
    }
}

use clap::ValueEnum;

/// Provider families with a concrete binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderFamily {
    OpenAi,
}

/// Pairing of a provider family with the concrete model name sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    pub family: ProviderFamily,
    pub model: &'static str,
}

/// User-facing model selector for `--model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelId {
    #[value(name = "gpt-4.1")]
    Gpt41,
    #[value(name = "gpt-5")]
    Gpt5,
    #[value(name = "gpt-5-mini")]
    Gpt5Mini,
    #[value(name = "o3")]
    O3,
    #[value(name = "o4-mini")]
    O4Mini,
}

impl ModelId {
    pub const ALL: [ModelId; 5] = [
        ModelId::Gpt41,
        ModelId::Gpt5,
        ModelId::Gpt5Mini,
        ModelId::O3,
        ModelId::O4Mini,
    ];

    /// Every identifier maps to exactly one record; model names are unique
    /// across the catalog.
    pub fn resolve(self) -> ModelInfo {
        match self {
            ModelId::Gpt41 => ModelInfo {
                family: ProviderFamily::OpenAi,
                model: "gpt-4.1",
            },
            ModelId::Gpt5 => ModelInfo {
                family: ProviderFamily::OpenAi,
                model: "gpt-5",
            },
            ModelId::Gpt5Mini => ModelInfo {
                family: ProviderFamily::OpenAi,
                model: "gpt-5-mini",
            },
            ModelId::O3 => ModelInfo {
                family: ProviderFamily::OpenAi,
                model: "o3",
            },
            ModelId::O4Mini => ModelInfo {
                family: ProviderFamily::OpenAi,
                model: "o4-mini",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_model_names_nonempty_and_unique() {
        let mut seen = HashSet::new();
        for id in ModelId::ALL {
            let info = id.resolve();
            assert!(!info.model.is_empty(), "{:?} has an empty model name", id);
            assert!(seen.insert(info.model), "duplicate model name {}", info.model);
        }
    }

    #[test]
    fn test_default_model_resolves_to_openai() {
        let info = ModelId::Gpt41.resolve();
        assert_eq!(info.family, ProviderFamily::OpenAi);
        assert_eq!(info.model, "gpt-4.1");
    }
}

use crate::game::constants::{MAX_ATTEMPTS_PER_MELD, MAX_GENERATION_RESTARTS, MAX_ROUNDS};

/// 出题参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GeneratorConfig {
    /// 每个面子随机抽样的尝试次数，用完后改为按顺序扫描
    pub max_attempts_per_meld: u32,
    /// 牌池耗尽时从头重来的次数
    pub max_restarts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts_per_meld: MAX_ATTEMPTS_PER_MELD,
            max_restarts: MAX_GENERATION_RESTARTS,
        }
    }
}

/// 一局的规则配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Rules {
    /// 每道题的作答次数
    pub max_rounds: usize,
    /// 出题参数
    pub generator: GeneratorConfig,
}

impl Rules {
    /// 作答次数至少为 1
    pub fn normalized(mut self) -> Self {
        self.max_rounds = self.max_rounds.max(1);
        self
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
            generator: GeneratorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = Rules::default();
        assert_eq!(rules.max_rounds, 4);
        assert_eq!(rules.generator.max_attempts_per_meld, 64);
    }

    #[test]
    fn test_rules_from_partial_json() {
        let rules: Rules = serde_json::from_str(r#"{ "max_rounds": 2 }"#).unwrap();
        assert_eq!(rules.max_rounds, 2);
        assert_eq!(rules.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_normalized() {
        let rules = Rules { max_rounds: 0, ..Rules::default() }.normalized();
        assert_eq!(rules.max_rounds, 1);
    }
}

/// 难度枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Difficulty {
    /// 初级
    Junior,
    /// 中级
    Mid,
    /// 高级
    Senior,
}

impl Difficulty {
    /// 获取标准名称（写入题库时使用）
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Junior => "Junior",
            Difficulty::Mid => "Mid",
            Difficulty::Senior => "Senior",
        }
    }

    /// 获取提示词中的难度描述（英文，供 LLM 使用）
    pub fn prompt_hint(self) -> &'static str {
        match self {
            Difficulty::Junior => {
                "suitable for a junior engineer with 0-2 years of experience, testing fundamentals"
            }
            Difficulty::Mid => {
                "suitable for a mid-level engineer with 2-5 years of experience, testing applied depth"
            }
            Difficulty::Senior => {
                "suitable for a senior engineer, testing tradeoffs, edge cases and design judgment"
            }
        }
    }

    /// 尝试从字符串解析难度（大小写不敏感，支持常见别名）
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "junior" | "easy" | "初级" => Some(Difficulty::Junior),
            "mid" | "medium" | "intermediate" | "中级" => Some(Difficulty::Mid),
            "senior" | "hard" | "高级" => Some(Difficulty::Senior),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Junior));
        assert_eq!(Difficulty::from_str("Medium"), Some(Difficulty::Mid));
        assert_eq!(Difficulty::from_str(" SENIOR "), Some(Difficulty::Senior));
        assert_eq!(Difficulty::from_str("impossible"), None);
    }
}

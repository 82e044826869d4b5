use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 题目类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub enum QuestionType {
    SingleChoice,   // 单选
    MultipleChoice, // 多选
    TrueFalse,      // 判断
}

impl QuestionType {
    pub const SINGLE_CHOICE: &'static str = "single_choice";
    pub const MULTIPLE_CHOICE: &'static str = "multiple_choice";
    pub const TRUE_FALSE: &'static str = "true_false";
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            QuestionType::SINGLE_CHOICE => Ok(QuestionType::SingleChoice),
            QuestionType::MULTIPLE_CHOICE => Ok(QuestionType::MultipleChoice),
            QuestionType::TRUE_FALSE => Ok(QuestionType::TrueFalse),
            _ => Err(serde::de::Error::custom(format!(
                "无效的题目类型: '{s}'. 支持的类型: single_choice, multiple_choice, true_false"
            ))),
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionType::SingleChoice => write!(f, "{}", QuestionType::SINGLE_CHOICE),
            QuestionType::MultipleChoice => write!(f, "{}", QuestionType::MULTIPLE_CHOICE),
            QuestionType::TrueFalse => write!(f, "{}", QuestionType::TRUE_FALSE),
        }
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_choice" => Ok(QuestionType::SingleChoice),
            "multiple_choice" => Ok(QuestionType::MultipleChoice),
            "true_false" => Ok(QuestionType::TrueFalse),
            _ => Err(format!("Invalid question type: {s}")),
        }
    }
}

// 备选答案
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct AnswerOption {
    pub id: i64,
    pub text: String,
    pub is_correct: bool,
}

// 题目
//
// 选项随题目在同一次创建调用中写入，之后不可单独追加。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub question_type: QuestionType,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// 选中的选项是否为本题的正确选项
    ///
    /// 选项ID不属于本题时不匹配也不报错。
    pub fn is_correct_option(&self, option_id: i64) -> bool {
        self.options
            .iter()
            .any(|opt| opt.id == option_id && opt.is_correct)
    }
}

// 测验
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct Quiz {
    pub id: i64,
    // 所属模块ID（一个模块至多一个测验）
    pub module_id: i64,
    pub title: String,
    // 限时（分钟）
    pub time_limit_minutes: Option<i32>,
    pub questions: Vec<Question>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 测验作答记录（每个学生对每个测验至多一次）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizAttempt {
    pub id: i64,
    pub quiz_id: i64,
    pub student_id: i64,
    // 百分比得分（0-100，截断整数除法）
    pub score_percent: i32,
    pub taken_at: chrono::DateTime<chrono::Utc>,
}

//! 测验计分
//!
//! 原始计数模型：每题答对计 1，不答或选项不属于本题计 0，不倒扣、
//! 不加权。百分比与绝对分均使用截断整数除法，与既有存量成绩保持
//! 一致（见 take.rs 的换算说明）。

use std::collections::HashMap;

use crate::models::quizzes::entities::Quiz;

/// 统计答对题数
///
/// answers 以题目ID为键、所选选项ID为值。缺失的题目与指向其他题目
/// 选项的ID都只计 0，不报错。
pub fn count_correct(quiz: &Quiz, answers: &HashMap<i64, i64>) -> i32 {
    quiz.questions
        .iter()
        .filter(|question| {
            answers
                .get(&question.id)
                .is_some_and(|selected| question.is_correct_option(*selected))
        })
        .count() as i32
}

/// 百分比得分，截断整数除法（不是四舍五入）
pub fn score_percentage(correct: i32, total_questions: i32) -> i32 {
    (correct * 100) / total_questions
}

/// 由百分比反推绝对得分，再次截断
///
/// 两次截断（正推再反推）通常取不回原始答对数，这是刻意保留的
/// 存量兼容行为，不要改成四舍五入。
pub fn absolute_score(score_percent: i32, total_questions: i32) -> i32 {
    (score_percent * total_questions) / 100
}

//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use super::navigation::Route;
use crate::models::Course;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Navigate(Route),
    Back,
    MoveSelectionUp,
    MoveSelectionDown,

    // 表单
    NextField,
    PrevField,
    NextCourse,
    PrevCourse,
    SelectCourse(Course),
    Submit,      // Enter
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}

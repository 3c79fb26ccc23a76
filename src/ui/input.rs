//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::form::FormField;
use super::navigation::Route;
use super::state::App;
use crate::models::Course;

/// 根据当前页面、表单焦点和按键获取对应的 Action
pub fn get_action(route: Route, focus: FormField, key: KeyCode) -> Option<Action> {
    match route {
        Route::Welcome => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Navigate(Route::Home)),
            _ => None,
        },
        Route::Home => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('a') => Some(Action::Navigate(Route::AddItem)),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
            _ => None,
        },
        Route::AddItem => match key {
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
            _ if focus == FormField::Course => course_action(key),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) if focus != FormField::Submit => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 课程选择器上的按键
fn course_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevCourse),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => Some(Action::NextCourse),
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            Some(Action::SelectCourse(Course::ALL[index]))
        }
        _ => None,
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(app.route(), app.form.focus, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_keys() {
        let focus = FormField::Name;
        assert_eq!(
            get_action(Route::Welcome, focus, KeyCode::Enter),
            Some(Action::Navigate(Route::Home))
        );
        assert_eq!(get_action(Route::Welcome, focus, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(get_action(Route::Welcome, focus, KeyCode::Char('a')), None);
    }

    #[test]
    fn test_home_keys() {
        let focus = FormField::Name;
        assert_eq!(
            get_action(Route::Home, focus, KeyCode::Char('a')),
            Some(Action::Navigate(Route::AddItem))
        );
        assert_eq!(get_action(Route::Home, focus, KeyCode::Down), Some(Action::MoveSelectionDown));
        assert_eq!(get_action(Route::Home, focus, KeyCode::Esc), Some(Action::Back));
    }

    #[test]
    fn test_form_text_input() {
        // 表单中的 q 是普通字符
        assert_eq!(
            get_action(Route::AddItem, FormField::Name, KeyCode::Char('q')),
            Some(Action::Input('q'))
        );
        assert_eq!(
            get_action(Route::AddItem, FormField::Price, KeyCode::Backspace),
            Some(Action::DeleteChar)
        );
        assert_eq!(get_action(Route::AddItem, FormField::Submit, KeyCode::Char('x')), None);
        assert_eq!(
            get_action(Route::AddItem, FormField::Submit, KeyCode::Enter),
            Some(Action::Submit)
        );
        assert_eq!(
            get_action(Route::AddItem, FormField::Description, KeyCode::BackTab),
            Some(Action::PrevField)
        );
    }

    #[test]
    fn test_course_selector_keys() {
        let focus = FormField::Course;
        assert_eq!(get_action(Route::AddItem, focus, KeyCode::Right), Some(Action::NextCourse));
        assert_eq!(get_action(Route::AddItem, focus, KeyCode::Char('h')), Some(Action::PrevCourse));
        assert_eq!(
            get_action(Route::AddItem, focus, KeyCode::Char('2')),
            Some(Action::SelectCourse(Course::MainCourse))
        );
        assert_eq!(get_action(Route::AddItem, focus, KeyCode::Char('x')), None);
        assert_eq!(get_action(Route::AddItem, focus, KeyCode::Enter), Some(Action::Submit));
    }
}

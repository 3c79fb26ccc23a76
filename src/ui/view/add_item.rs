use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::components::{ACCENT, BROWN, FOCUS, PEACH, render_button, render_input_widget};
use crate::models::Course;
use crate::ui::form::{AddItemForm, FormField};
use crate::ui::state::App;

/// 添加菜品表单页
pub fn render_add_item(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 名称
            Constraint::Length(3), // 描述
            Constraint::Length(3), // 价格
            Constraint::Length(3), // 课程
            Constraint::Length(3), // 提交
            Constraint::Min(0),
        ])
        .split(area);

    let fields = [
        (FormField::Name, form.name.as_str()),
        (FormField::Description, form.description.as_str()),
        (FormField::Price, form.price.as_str()),
    ];
    for (i, (field, value)) in fields.into_iter().enumerate() {
        render_input_widget(frame, chunks[i], field.label(), value, form.focus == field);
    }

    render_course_selector(frame, form, chunks[3]);
    render_button(
        frame,
        chunks[4],
        FormField::Submit.label(),
        form.focus == FormField::Submit,
    );
}

/// 课程选择器：选中的课程使用主色，其余使用强调色
fn render_course_selector(frame: &mut Frame, form: &AddItemForm, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let focused = form.focus == FormField::Course;
    for (i, course) in Course::ALL.iter().enumerate() {
        let selected = *course == form.course;
        let bg = if selected { BROWN } else { ACCENT };
        let border = if focused && selected {
            Style::default().fg(FOCUS).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let label = if selected {
            format!("[{}] {}", i + 1, course)
        } else {
            format!(" {}  {}", i + 1, course)
        };

        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(PEACH).bg(bg).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(button, columns[i]);
    }
}

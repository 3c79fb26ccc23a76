//! 通用 UI 组件
//!
//! 输入框、按钮等通用组件，以及配色

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// 背景色 (#FFE5B4)
pub const PEACH: Color = Color::Rgb(0xFF, 0xE5, 0xB4);
/// 主色 (#5A3E36)
pub const BROWN: Color = Color::Rgb(0x5A, 0x3E, 0x36);
/// 强调色 (#D9534F)
pub const ACCENT: Color = Color::Rgb(0xD9, 0x53, 0x4F);
/// 焦点边框颜色
pub const FOCUS: Color = Color::Yellow;

/// [组件] 带标签的输入框，值为空时显示灰色占位文字
pub fn render_input_widget(frame: &mut Frame, area: Rect, label: &str, value: &str, is_focused: bool) {
    let border_style = if is_focused {
        Style::default().fg(FOCUS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BROWN)
    };

    let input = if value.is_empty() && !is_focused {
        Paragraph::new(label).style(Style::default().fg(Color::Gray))
    } else if is_focused {
        Paragraph::new(format!("{}_", value)).style(Style::default().fg(Color::White))
    } else {
        Paragraph::new(value).style(Style::default().fg(Color::White))
    };

    let input = input.block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}

/// [组件] 按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_focused: bool) {
    let border_style = if is_focused {
        Style::default().fg(FOCUS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BROWN)
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(PEACH)
                .bg(BROWN)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(button, area);
}

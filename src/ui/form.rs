//! 添加菜品表单（未提交的字段值）

use crate::models::Course;

/// 表单中可获得焦点的位置，按显示顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Description,
    Price,
    Course,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Name,
        FormField::Description,
        FormField::Price,
        FormField::Course,
        FormField::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// 字段标签，文本字段为空时也作为占位提示
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Dish Name",
            FormField::Description => "Description",
            FormField::Price => "Price",
            FormField::Course => "Course",
            FormField::Submit => "Add Item",
        }
    }
}

/// 表单状态；每次进入添加页时重置
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub course: Course,
    pub focus: FormField,
}

impl AddItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前焦点对应的文本缓冲区
    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::Price => Some(&mut self.price),
            FormField::Course | FormField::Submit => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(buffer) = self.focused_buffer() {
            buffer.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(buffer) = self.focused_buffer() {
            buffer.pop();
        }
    }

    pub fn select_course(&mut self, course: Course) {
        self.course = course;
    }

    pub fn next_course(&mut self) {
        self.course = self.course.next();
    }

    pub fn prev_course(&mut self) {
        self.course = self.course.prev();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_defaults() {
        let form = AddItemForm::new();
        assert_eq!(form.course, Course::Starters);
        assert_eq!(form.focus, FormField::Name);
        assert!(form.name.is_empty() && form.description.is_empty() && form.price.is_empty());
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = AddItemForm::new();
        "Soup".chars().for_each(|c| form.push_char(c));
        form.focus_next();
        "Tomato".chars().for_each(|c| form.push_char(c));
        form.pop_char();
        form.focus_next();
        "45".chars().for_each(|c| form.push_char(c));

        assert_eq!(form.name, "Soup");
        assert_eq!(form.description, "Tomat");
        assert_eq!(form.price, "45");

        // 课程选择器上输入无效
        form.focus_next();
        form.push_char('x');
        form.pop_char();
        assert_eq!(form.price, "45");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = AddItemForm::new();
        form.focus_prev();
        assert_eq!(form.focus, FormField::Submit);
        form.focus_next();
        assert_eq!(form.focus, FormField::Name);
    }

    #[test]
    fn test_latest_course_selection_wins() {
        let mut form = AddItemForm::new();
        form.next_course();
        form.next_course();
        assert_eq!(form.course, Course::Desserts);
        form.select_course(Course::MainCourse);
        assert_eq!(form.course, Course::MainCourse);
        form.prev_course();
        assert_eq!(form.course, Course::Starters);
    }
}

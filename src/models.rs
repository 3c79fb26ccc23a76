use chrono::{DateTime, Local};
use std::fmt;
use thiserror::Error;

/// 菜品所属的课程（固定集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Course {
    #[default]
    Starters,
    MainCourse,
    Desserts,
}

impl Course {
    /// 按展示顺序排列的全部课程
    pub const ALL: [Course; 3] = [Course::Starters, Course::MainCourse, Course::Desserts];

    pub fn label(self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::MainCourse => "Main Course",
            Course::Desserts => "Desserts",
        }
    }

    /// 下一个课程（循环）
    pub fn next(self) -> Self {
        match self {
            Course::Starters => Course::MainCourse,
            Course::MainCourse => Course::Desserts,
            Course::Desserts => Course::Starters,
        }
    }

    /// 上一个课程（循环）
    pub fn prev(self) -> Self {
        match self {
            Course::Starters => Course::Desserts,
            Course::MainCourse => Course::Starters,
            Course::Desserts => Course::MainCourse,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 价格解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is out of range")]
    OutOfRange(String),
}

/// 以十进制解析价格文本
///
/// 跳过前导空白，允许一个正负号，取最长的数字前缀，其后的字符忽略。
pub fn parse_price(text: &str) -> Result<i64, PriceError> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Err(PriceError::Empty);
    }

    let (negative, rest) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(PriceError::NotANumber(text.to_string()));
    }

    let digits = &rest[..digits_len];
    let magnitude: i64 = digits
        .parse()
        .map_err(|_| PriceError::OutOfRange(text.to_string()))?;

    Ok(if negative { -magnitude } else { magnitude })
}

/// 菜品价格；无法解析的输入保存为 NaN 标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    Amount(i64),
    NotANumber,
}

impl Price {
    pub fn parse(text: &str) -> Self {
        parse_price(text).map_or(Price::NotANumber, Price::Amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(value) => write!(f, "{}", value),
            Price::NotANumber => f.write_str("NaN"),
        }
    }
}

/// 菜单条目
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: Price,
    pub added_at: DateTime<Local>,
}

/// 会话内的菜单（仅内存）
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// 追加条目，id 为追加前的长度 + 1。价格无效时保存 NaN，不报错。
    pub fn append(
        &mut self,
        name: String,
        description: String,
        course: Course,
        price_text: &str,
    ) -> &MenuItem {
        let price = Price::parse(price_text);
        self.push(name, description, course, price)
    }

    /// 与 `append` 相同，但价格无效时返回错误且不修改菜单
    pub fn try_append(
        &mut self,
        name: String,
        description: String,
        course: Course,
        price_text: &str,
    ) -> Result<&MenuItem, PriceError> {
        let price = parse_price(price_text)?;
        Ok(self.push(name, description, course, Price::Amount(price)))
    }

    fn push(&mut self, name: String, description: String, course: Course, price: Price) -> &MenuItem {
        let item = MenuItem {
            id: (self.items.len() + 1).to_string(),
            name,
            description,
            course,
            price,
            added_at: Local::now(),
        };
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    /// 某课程下的条目数
    pub fn count_by_course(&self, course: Course) -> usize {
        self.items.iter().filter(|item| item.course == course).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_assigns_sequential_ids() {
        let mut store = MenuStore::new();
        for k in 1..=5 {
            let item = store.append(format!("Dish {k}"), String::new(), Course::MainCourse, "10");
            assert_eq!(item.id, k.to_string());
            assert_eq!(store.count(), k);
        }
    }

    #[test]
    fn test_append_keeps_previous_items() {
        let mut store = MenuStore::new();
        store.append("Soup".to_string(), "Tomato soup".to_string(), Course::Starters, "45");
        let before = store.items()[0].clone();

        store.append("Steak".to_string(), "Rump".to_string(), Course::MainCourse, "180");
        store.append("".to_string(), "".to_string(), Course::Desserts, "x");

        assert_eq!(store.items()[0], before);
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut store = MenuStore::new();
        assert!(store.is_empty());

        store.append("Soup".to_string(), "Tomato soup".to_string(), Course::Starters, "45");
        store.append("Cake".to_string(), "Chocolate cake".to_string(), Course::Desserts, "abc");

        assert_eq!(store.count(), 2);

        let soup = store.get(0).unwrap();
        assert_eq!(soup.id, "1");
        assert_eq!(soup.name, "Soup");
        assert_eq!(soup.price, Price::Amount(45));
        assert_eq!(soup.course, Course::Starters);

        let cake = store.get(1).unwrap();
        assert_eq!(cake.id, "2");
        assert_eq!(cake.name, "Cake");
        assert_eq!(cake.price, Price::NotANumber);
        assert_eq!(cake.price.to_string(), "NaN");
        assert_eq!(cake.course, Course::Desserts);
    }

    #[test]
    fn test_try_append_rejects_invalid_price() {
        let mut store = MenuStore::new();
        let err = store
            .try_append("Cake".to_string(), "".to_string(), Course::Desserts, "abc")
            .unwrap_err();
        assert_eq!(err, PriceError::NotANumber("abc".to_string()));
        assert!(store.is_empty());

        let item = store
            .try_append("Cake".to_string(), "".to_string(), Course::Desserts, "60")
            .unwrap();
        assert_eq!(item.id, "1");
        assert_eq!(item.price, Price::Amount(60));
    }

    #[test]
    fn test_count_by_course() {
        let mut store = MenuStore::new();
        store.append("A".to_string(), "".to_string(), Course::Starters, "1");
        store.append("B".to_string(), "".to_string(), Course::Desserts, "2");
        store.append("C".to_string(), "".to_string(), Course::Desserts, "3");

        assert_eq!(store.count_by_course(Course::Starters), 1);
        assert_eq!(store.count_by_course(Course::MainCourse), 0);
        assert_eq!(store.count_by_course(Course::Desserts), 2);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("45"), Ok(45));
        assert_eq!(parse_price("  12"), Ok(12));
        assert_eq!(parse_price("-3"), Ok(-3));
        assert_eq!(parse_price("+7"), Ok(7));
        assert_eq!(parse_price("45abc"), Ok(45));
        assert_eq!(parse_price("4.5"), Ok(4));
        assert_eq!(parse_price(""), Err(PriceError::Empty));
        assert_eq!(parse_price("   "), Err(PriceError::Empty));
        assert_eq!(parse_price("abc"), Err(PriceError::NotANumber("abc".to_string())));
        assert_eq!(parse_price("-"), Err(PriceError::NotANumber("-".to_string())));
        assert_eq!(parse_price(".5"), Err(PriceError::NotANumber(".5".to_string())));
        assert!(matches!(
            parse_price("99999999999999999999"),
            Err(PriceError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::parse("45").to_string(), "45");
        assert_eq!(Price::parse("-0").to_string(), "0");
        assert_eq!(Price::parse("abc").to_string(), "NaN");
        assert_eq!(Price::parse(""), Price::NotANumber);
    }

    #[test]
    fn test_course_cycle() {
        assert_eq!(Course::default(), Course::Starters);
        assert_eq!(Course::ALL[0], Course::default());
        for course in Course::ALL {
            assert_eq!(course.next().prev(), course);
        }
        assert_eq!(Course::Desserts.next(), Course::Starters);
        assert_eq!(Course::MainCourse.to_string(), "Main Course");
    }
}

//! App 状态定义 (Model)
//!
//! 菜单、导航栈和表单都由 App 持有，视图只读取，dispatch 负责修改

use crate::config::Config;
use crate::models::{MenuItem, MenuStore};

use super::form::AddItemForm;
use super::navigation::{Navigator, Route};

/// 应用状态
pub struct App {
    pub store: MenuStore,
    pub navigator: Navigator,
    pub form: AddItemForm,
    pub selected_index: usize,
    pub message: Option<String>,
    pub config: Config,
}

impl App {
    /// 创建新的应用实例，从欢迎页开始，菜单为空
    pub fn new(config: Config) -> Self {
        Self {
            store: MenuStore::new(),
            navigator: Navigator::default(),
            form: AddItemForm::new(),
            selected_index: 0,
            message: None,
            config,
        }
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    /// 获取当前选中的条目
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.store.get(self.selected_index)
    }

    /// 条目显示文本，如 "Soup - Tomato soup - R45"
    pub fn item_line(&self, item: &MenuItem) -> String {
        format!(
            "{} - {} - {}{}",
            item.name, item.description, self.config.menu.currency_symbol, item.price
        )
    }
}

//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use tracing::{debug, info, warn};

use super::actions::Action;
use super::form::AddItemForm;
use super::navigation::Route;
use super::state::App;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Navigate(route) => self.navigate(route),
            Action::Back => self.go_back(),
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::NextField => self.form.focus_next(),
            Action::PrevField => self.form.focus_prev(),
            Action::NextCourse => self.form.next_course(),
            Action::PrevCourse => self.form.prev_course(),
            Action::SelectCourse(course) => self.form.select_course(course),
            Action::Input(c) => self.form.push_char(c),
            Action::DeleteChar => self.form.pop_char(),

            Action::Submit => {
                if self.route() == Route::AddItem {
                    self.submit_form();
                }
            }
        }
        false
    }

    // ============ 导航相关 ============

    /// 导航到指定页面，新进入添加页时重置表单
    pub fn navigate(&mut self, route: Route) {
        let from = self.route();
        let pushed = self.navigator.navigate(route);
        if pushed && route == Route::AddItem {
            self.form = AddItemForm::new();
        }
        if from != route {
            self.message = None;
            debug!(from = from.name(), to = route.name(), "navigate");
        }
    }

    /// 返回上一页，离开添加页时丢弃未提交的表单
    pub fn go_back(&mut self) {
        if let Some(left) = self.navigator.go_back() {
            if left == Route::AddItem {
                self.form = AddItemForm::new();
            }
            self.message = None;
            debug!(from = left.name(), to = self.route().name(), "back");
        }
    }

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.store.count() {
            self.selected_index += 1;
        }
    }

    // ============ 添加条目相关 ============

    /// 提交表单：追加条目后回到菜单列表
    pub fn submit_form(&mut self) {
        let form = &self.form;
        let added = if self.config.menu.strict_prices {
            self.store.try_append(
                form.name.clone(),
                form.description.clone(),
                form.course,
                &form.price,
            )
        } else {
            Ok(self.store.append(
                form.name.clone(),
                form.description.clone(),
                form.course,
                &form.price,
            ))
        };

        let added = match added {
            Ok(item) => {
                info!(
                    id = %item.id,
                    course = item.course.label(),
                    price = %item.price,
                    "menu item added"
                );
                format!("Added {} (#{})", item.name, item.id)
            }
            Err(err) => {
                warn!(error = %err, "price rejected");
                self.message = Some(format!("Invalid price: {}", err));
                return;
            }
        };

        self.navigate(Route::Home);
        self.selected_index = self.store.count().saturating_sub(1);
        self.message = Some(added);
    }
}

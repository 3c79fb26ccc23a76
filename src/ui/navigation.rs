//! 路由与页面栈

/// 可显示的页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Home,
    AddItem,
}

impl Route {
    /// 路由名
    pub fn name(self) -> &'static str {
        match self {
            Route::Welcome => "Welcome",
            Route::Home => "Home",
            Route::AddItem => "AddItem",
        }
    }

    /// 欢迎页不显示标题栏
    pub fn shows_header(self) -> bool {
        !matches!(self, Route::Welcome)
    }
}

/// 栈式导航器
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> Route {
        self.stack[self.stack.len() - 1]
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// 导航到指定页面：已在栈中则弹回该页面，否则压栈。
    /// 返回是否压入了新页面。
    pub fn navigate(&mut self, route: Route) -> bool {
        match self.stack.iter().position(|r| *r == route) {
            Some(index) => {
                self.stack.truncate(index + 1);
                false
            }
            None => {
                self.stack.push(route);
                true
            }
        }
    }

    /// 返回上一页，返回被弹出的页面
    pub fn go_back(&mut self) -> Option<Route> {
        if self.can_go_back() {
            self.stack.pop()
        } else {
            None
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Welcome)
    }
}

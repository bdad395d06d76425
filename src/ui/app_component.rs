//! Composition root.
//!
//! Holds every page, decides which one is visible, and routes messages:
//! keys go to the visible page only, window/timer/async messages go to all
//! pages. `*` and `#` switch pages forward and backward. Global quit keys are
//! handled here before anything is delegated.

use crate::config::Config;
use crate::constants::APP_HELP;
use crate::ui::components::{BranchPicker, Graph, ProgressDemo};
use crate::ui::core::keys::{is_force_quit, is_quit, key_name};
use crate::ui::core::{Command, Component, FocusRouter, Message, NavKeys, Route};
use crate::vcs::Branch;
use crossterm::event::KeyCode;
use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Picker,
    Demo,
    Graph,
}

impl PageKind {
    pub fn title(&self) -> &'static str {
        match self {
            PageKind::Picker => "Branches",
            PageKind::Demo => "Demo",
            PageKind::Graph => "Graph",
        }
    }
}

/// Every page the root can show. Dispatch is an exhaustive match, so adding a
/// page is a compile-checked change.
pub enum Page {
    Picker(BranchPicker),
    Demo(ProgressDemo),
    Graph(Graph),
}

impl Page {
    pub fn kind(&self) -> PageKind {
        match self {
            Page::Picker(_) => PageKind::Picker,
            Page::Demo(_) => PageKind::Demo,
            Page::Graph(_) => PageKind::Graph,
        }
    }
}

impl Component for Page {
    fn init(&mut self) -> Command {
        match self {
            Page::Picker(p) => p.init(),
            Page::Demo(d) => d.init(),
            Page::Graph(g) => g.init(),
        }
    }

    fn update(&mut self, msg: &Message) -> Command {
        match self {
            Page::Picker(p) => p.update(msg),
            Page::Demo(d) => d.update(msg),
            Page::Graph(g) => g.update(msg),
        }
    }

    fn view(&self) -> String {
        match self {
            Page::Picker(p) => p.view(),
            Page::Demo(d) => d.view(),
            Page::Graph(g) => g.view(),
        }
    }

    fn captures_input(&self) -> bool {
        match self {
            Page::Picker(p) => p.captures_input(),
            Page::Demo(d) => d.captures_input(),
            Page::Graph(g) => g.captures_input(),
        }
    }
}

pub struct AppComponent {
    pages: Vec<Page>,
    router: FocusRouter<PageKind>,
    exit_code: i32,
    quitting: bool,
}

impl AppComponent {
    pub fn new(config: &Config) -> Self {
        Self::with_pages(vec![
            Page::Picker(BranchPicker::new(config.ui.list_height)),
            Page::Demo(ProgressDemo::new(&config.demo)),
            Page::Graph(Graph::new()),
        ])
    }

    /// Build a root over `pages`; the first one is visible.
    pub fn with_pages(pages: Vec<Page>) -> Self {
        let kinds = pages.iter().map(Page::kind).collect();
        Self {
            pages,
            router: FocusRouter::new(kinds, NavKeys::new(KeyCode::Char('#'), KeyCode::Char('*'))),
            exit_code: 0,
            quitting: false,
        }
    }

    pub fn active(&self) -> Option<PageKind> {
        self.router.focused()
    }

    pub fn page(&self, kind: PageKind) -> Option<&Page> {
        self.pages.iter().find(|p| p.kind() == kind)
    }

    fn page_mut(&mut self, kind: PageKind) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.kind() == kind)
    }

    fn active_page_mut(&mut self) -> Option<&mut Page> {
        let kind = self.router.focused()?;
        self.page_mut(kind)
    }

    pub fn picker(&self) -> Option<&BranchPicker> {
        match self.page(PageKind::Picker) {
            Some(Page::Picker(p)) => Some(p),
            _ => None,
        }
    }

    pub fn demo(&self) -> Option<&ProgressDemo> {
        match self.page(PageKind::Demo) {
            Some(Page::Demo(d)) => Some(d),
            _ => None,
        }
    }

    /// The branch the picker switched to, once it has.
    pub fn chosen_branch(&self) -> Option<&Branch> {
        self.picker().and_then(BranchPicker::chosen)
    }

    fn active_captures_input(&self) -> bool {
        self.router
            .focused()
            .and_then(|kind| self.page(kind))
            .is_some_and(Page::captures_input)
    }

    fn dispatch(&mut self, msg: &Message) -> Command {
        match self.router.route(msg, self.active_captures_input()) {
            Route::Navigate(direction) => {
                let Some(kind) = self.router.navigate(direction) else {
                    return Command::None;
                };
                info!("AppComponent: showing {} page", kind.title());
                match self.page_mut(kind) {
                    Some(page) => page.update(&Message::Activated),
                    None => Command::None,
                }
            }
            Route::Focused => match self.active_page_mut() {
                Some(page) => page.update(msg),
                None => Command::None,
            },
            Route::Broadcast => Command::batch(self.pages.iter_mut().map(|p| p.update(msg)).collect::<Vec<_>>()),
            Route::Release | Route::Ignore => Command::None,
        }
    }

    /// Turn the picker's terminal states into a quit.
    fn check_picker(&mut self) -> Command {
        if self.quitting {
            return Command::None;
        }
        let Some(picker) = self.picker() else {
            return Command::None;
        };

        if picker.is_fatal() {
            warn!("AppComponent: no repository to pick from, quitting");
            self.exit_code = 1;
        } else if picker.is_done() {
            info!("AppComponent: branch switched, quitting");
        } else {
            return Command::None;
        }
        self.quitting = true;
        Command::quit()
    }

    fn tab_bar(&self) -> String {
        let active = self.router.focused();
        let tabs: Vec<String> = self
            .router
            .targets()
            .iter()
            .map(|kind| {
                if Some(*kind) == active {
                    format!("[{}]", kind.title())
                } else {
                    format!(" {} ", kind.title())
                }
            })
            .collect();
        format!(" {}", tabs.join(" │ "))
    }
}

impl Component for AppComponent {
    fn init(&mut self) -> Command {
        Command::batch(self.pages.iter_mut().map(Component::init).collect::<Vec<_>>())
    }

    fn update(&mut self, msg: &Message) -> Command {
        if let Message::Key(key) = msg {
            if is_force_quit(key) || (is_quit(key) && !self.active_captures_input()) {
                debug!("AppComponent: global key '{}' - quitting", key_name(key));
                return Command::quit();
            }
        }

        let command = self.dispatch(msg);
        Command::batch([command, self.check_picker()])
    }

    fn view(&self) -> String {
        let body = self
            .router
            .focused()
            .and_then(|kind| self.page(kind))
            .map(Component::view)
            .unwrap_or_default();

        format!("{}\n{}\n\n  {}", self.tab_bar(), body, APP_HELP)
    }

    fn captures_input(&self) -> bool {
        self.active_captures_input()
    }

    fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

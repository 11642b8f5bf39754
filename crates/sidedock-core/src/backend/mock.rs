//! In-memory backend for tests. Records every call it receives.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::backend::DesktopBackend;
use crate::windows::{
    PointerPosition, RunningInventory, ScreenSize, WindowToolError, parse_window_list,
};

pub(crate) struct MockBackend {
    listing: Mutex<String>,
    pointer: Mutex<PointerPosition>,
    screen: ScreenSize,
    fail_list: AtomicBool,
    fail_focus: AtomicBool,
    fail_minimize: AtomicBool,
    fail_launch: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            listing: Mutex::new(String::new()),
            pointer: Mutex::new(PointerPosition { x: 500, y: 500 }),
            screen: ScreenSize {
                width: 1920,
                height: 1080,
            },
            fail_list: AtomicBool::new(false),
            fail_focus: AtomicBool::new(false),
            fail_minimize: AtomicBool::new(false),
            fail_launch: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockBackend {
    pub fn with_listing(listing: &str) -> Self {
        let backend = Self::default();
        backend.set_listing(listing);
        backend
    }

    pub fn set_listing(&self, listing: &str) {
        *self.listing.lock().unwrap() = listing.to_string();
    }

    pub fn set_pointer(&self, x: i32, y: i32) {
        *self.pointer.lock().unwrap() = PointerPosition { x, y };
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_focus(&self, fail: bool) {
        self.fail_focus.store(fail, Ordering::SeqCst);
    }

    pub fn fail_minimize(&self, fail: bool) {
        self.fail_minimize.store(fail, Ordering::SeqCst);
    }

    pub fn fail_launch(&self, fail: bool) {
        self.fail_launch.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_matching(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with(prefix))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn failure(tool: &str) -> WindowToolError {
        WindowToolError::NonZeroExit {
            tool: tool.to_string(),
            code: 1,
            stderr: "mock failure".to_string(),
        }
    }
}

impl DesktopBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn list_windows(&self) -> Result<RunningInventory, WindowToolError> {
        self.record("list".to_string());
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::failure("wmctrl"));
        }
        Ok(parse_window_list(&self.listing.lock().unwrap()))
    }

    async fn activate_window(&self, window_id: &str) -> Result<(), WindowToolError> {
        self.record(format!("activate {window_id}"));
        if self.fail_focus.load(Ordering::SeqCst) {
            return Err(Self::failure("wmctrl"));
        }
        Ok(())
    }

    async fn minimize_window(&self, window_id: &str) -> Result<(), WindowToolError> {
        self.record(format!("minimize {window_id}"));
        if self.fail_minimize.load(Ordering::SeqCst) {
            return Err(Self::failure("xdotool"));
        }
        Ok(())
    }

    async fn pointer_location(&self) -> Result<PointerPosition, WindowToolError> {
        self.record("pointer".to_string());
        Ok(*self.pointer.lock().unwrap())
    }

    async fn screen_size(&self) -> Result<ScreenSize, WindowToolError> {
        self.record("screen".to_string());
        Ok(self.screen)
    }

    fn launch(&self, command: &str) -> Result<(), WindowToolError> {
        self.record(format!("launch {command}"));
        if self.fail_launch.load(Ordering::SeqCst) {
            return Err(Self::failure("sh"));
        }
        Ok(())
    }
}

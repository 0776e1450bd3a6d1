//! TUI 常量定义

/// URL 显示截断长度
pub const URL_TRUNCATE_LENGTH: usize = 60;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    pub const BOOKMARK_FORM: PopupSize = PopupSize::new(70, 50);
    pub const HELP: PopupSize = PopupSize::new(70, 75);
    pub const DELETE_CONFIRM: PopupSize = PopupSize::new(65, 45);
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

//! 表单状态管理
//!
//! Holds the name/URL inputs, the edit cursor and per-field validation
//! errors for the add/edit form.

use std::collections::HashMap;

use crate::storage::Bookmark;

/// Whether a submit creates a new bookmark or overwrites an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditCursor {
    #[default]
    Creating,
    /// Form is bound to the bookmark at this list index.
    Editing(usize),
}

impl EditCursor {
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Creating => None,
            Self::Editing(index) => Some(*index),
        }
    }
}

/// 当前正在编辑的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    SiteName,
    SiteUrl,
}

impl FormField {
    const ALL: [Self; 2] = [Self::SiteName, Self::SiteUrl];

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }

    /// 获取字段名称（用于验证错误的 key）
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::SiteName => "site_name",
            Self::SiteUrl => "site_url",
        }
    }

    pub fn display_title(&self) -> &'static str {
        match self {
            Self::SiteName => "Site Name",
            Self::SiteUrl => "Site URL",
        }
    }
}

#[derive(Debug, Default)]
pub struct FormState {
    pub site_name: String,
    pub site_url: String,
    pub cursor: EditCursor,
    /// 验证错误 (field_name -> error_message)
    pub validation_errors: HashMap<String, String>,
    pub currently_editing: Option<FormField>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty both inputs and go back to create mode.
    pub fn clear(&mut self) {
        self.site_name.clear();
        self.site_url.clear();
        self.cursor = EditCursor::Creating;
        self.validation_errors.clear();
        self.currently_editing = None;
    }

    /// Fill the inputs from `bookmark` and bind the form to `index`.
    pub fn begin_edit(&mut self, index: usize, bookmark: &Bookmark) {
        self.site_name = bookmark.site_name.clone();
        self.site_url = bookmark.site_url.clone();
        self.cursor = EditCursor::Editing(index);
        self.validation_errors.clear();
        self.currently_editing = Some(FormField::SiteName);
    }

    /// Drop the edit binding, keeping whatever is typed in.
    pub fn reset_cursor(&mut self) {
        self.cursor = EditCursor::Creating;
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.cursor, EditCursor::Editing(_))
    }

    pub fn toggle_field(&mut self) {
        self.currently_editing = Some(match &self.currently_editing {
            Some(field) => field.next(),
            None => FormField::default(),
        });
    }

    /// Move focus backwards; with nothing focused this lands on the last field.
    pub fn toggle_field_back(&mut self) {
        self.currently_editing = Some(match &self.currently_editing {
            Some(field) => field.prev(),
            None => FormField::SiteUrl,
        });
    }

    pub fn input(&self, field: FormField) -> &str {
        match field {
            FormField::SiteName => &self.site_name,
            FormField::SiteUrl => &self.site_url,
        }
    }

    pub fn input_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::SiteName => &mut self.site_name,
            FormField::SiteUrl => &mut self.site_url,
        }
    }

    /// 向当前编辑字段添加字符
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.currently_editing {
            self.input_mut(field).push(c);
        }
    }

    /// 从当前编辑字段删除最后一个字符
    pub fn pop_char(&mut self) {
        if let Some(field) = self.currently_editing {
            self.input_mut(field).pop();
        }
    }

    pub fn get_error(&self, field: FormField) -> Option<&String> {
        self.validation_errors.get(field.field_name())
    }

    pub fn set_error(&mut self, field: FormField, error: String) {
        self.validation_errors
            .insert(field.field_name().to_string(), error);
    }

    pub fn clear_errors(&mut self) {
        self.validation_errors.clear();
    }

    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }
}

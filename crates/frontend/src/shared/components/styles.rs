//! Inline style constants shared by the list and detail pages.

pub const PAGE: &str = "padding: 16px 24px; max-width: 1100px; margin: 0 auto; font-family: system-ui, sans-serif;";

pub const HEADER: &str =
    "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;";

pub const TITLE: &str = "font-size: 22px; font-weight: 600; margin: 0;";

pub const ACTIONS: &str = "display: flex; gap: 8px; align-items: center;";

pub const BUTTON: &str = "padding: 7px 14px; border: 1px solid #ccc; border-radius: 4px; background: white; cursor: pointer; font-size: 14px; text-decoration: none; color: inherit;";

pub const BUTTON_PRIMARY: &str = "padding: 7px 14px; border: 1px solid #1976d2; border-radius: 4px; background: #1976d2; color: white; cursor: pointer; font-size: 14px; text-decoration: none;";

pub const BUTTON_DANGER: &str = "padding: 7px 14px; border: 1px solid #c62828; border-radius: 4px; background: white; color: #c62828; cursor: pointer; font-size: 14px;";

pub const TABLE: &str = "width: 100%; border-collapse: collapse; font-size: 14px;";

pub const TH: &str = "text-align: left; padding: 8px 10px; border-bottom: 2px solid #ddd; font-weight: 600; white-space: nowrap;";

pub const TD: &str = "padding: 8px 10px; border-bottom: 1px solid #eee;";

pub const ERROR_BOX: &str = "background: #fdecea; border: 1px solid #f5c6cb; color: #c62828; border-radius: 4px; padding: 8px 12px; margin-bottom: 12px; font-size: 14px;";

pub const MUTED: &str = "color: #888; font-size: 14px; padding: 12px 0;";

pub const INPUT: &str = "padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;";

pub const FIELD_LABEL: &str = "font-size: 13px; color: #666;";

pub const FILTER_BAR: &str = "display: flex; gap: 16px; align-items: flex-start; flex-wrap: wrap; margin-bottom: 14px; padding: 12px; background: #fafafa; border: 1px solid #eee; border-radius: 6px;";

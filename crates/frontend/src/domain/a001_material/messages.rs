//! Тексты уведомлений экрана материалов (фарси)

pub const LOAD_FAILED: &str = "خطا در بارگیری متریال‌ها";
pub const NAME_REQUIRED: &str = "نام متریال نمی‌تواند خالی باشد";

pub const CREATED: &str = "متریال با موفقیت ایجاد شد";
pub const CREATE_FAILED: &str = "خطا در ایجاد متریال";

pub const UPDATED: &str = "متریال با موفقیت به‌روزرسانی شد";
pub const UPDATE_FAILED: &str = "خطا در به‌روزرسانی متریال";

pub const DELETED: &str = "متریال با موفقیت حذف شد";
pub const DELETE_FAILED: &str = "خطا در حذف متریال";

pub(crate) mod cart_badge;
pub(crate) mod guarded_switch;
pub(crate) mod header;
pub(crate) mod loading;
pub(crate) mod notice_toast;

pub use guarded_switch::GuardedSwitch;
pub use header::Header;
pub use notice_toast::NoticeToast;

pub mod carousel;
pub mod controls;
pub mod navigation;
pub mod recruit_form;
pub mod section;
pub mod top_sheet;

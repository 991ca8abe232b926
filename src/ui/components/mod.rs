pub mod kpi_card;
pub mod select_field;
pub mod toast;

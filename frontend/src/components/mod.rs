pub mod hotel_detail;
pub mod hotel_form;
pub mod hotel_list;

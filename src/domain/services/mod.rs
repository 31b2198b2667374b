pub mod booking_rules;

//! Recording test doubles and end-to-end lifecycle scenarios


mod lifecycle_scenarios;

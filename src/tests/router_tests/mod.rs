mod access_tests;
mod events_tests;
mod news_tests;
mod reports_tests;

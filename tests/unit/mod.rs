mod application;
mod test_error;
mod test_query;

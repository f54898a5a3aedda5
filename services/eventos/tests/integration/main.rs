mod helpers;

mod router_test;
mod token_test;
mod user_test;

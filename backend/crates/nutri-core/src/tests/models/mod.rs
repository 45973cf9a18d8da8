mod identity;
mod user_id;

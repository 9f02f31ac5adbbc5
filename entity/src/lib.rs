pub mod user;

/*
 Users register themselves and pick a role; bugs and features hang off users later.
 Passwords only ever live here as argon2 PHC strings.
 */

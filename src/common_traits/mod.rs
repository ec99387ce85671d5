mod debug;
mod into;

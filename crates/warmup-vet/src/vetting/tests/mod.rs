mod blacklist;
mod common;
mod domain;
mod gate;
mod routing;

pub mod countdown_ring;

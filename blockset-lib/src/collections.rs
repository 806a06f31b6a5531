pub mod block_pos_set;

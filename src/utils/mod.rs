pub mod city_index;
pub mod init_data;
pub mod popularity_queue;
pub mod route_graph;

pub mod connection_layer;
pub mod radial_drag_drop;
pub mod radial_geometry;
pub mod radial_layout;
pub mod radial_view;
pub mod subnode_paging;

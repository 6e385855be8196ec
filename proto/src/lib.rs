//! Generated gRPC types for the race and sports catalogs.

pub mod racing {
    tonic::include_proto!("racing");
}

pub mod sports {
    tonic::include_proto!("sports");
}

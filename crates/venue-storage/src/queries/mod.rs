pub mod venue_crud;

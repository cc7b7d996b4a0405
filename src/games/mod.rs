pub mod eclipsed_sun;

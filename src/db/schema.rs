// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SQL statements for the loader.
//!
//! Drop/create order matters: Activities holds a foreign key into Athletes,
//! so the child table is dropped first and created last.

pub const DROP_ACTIVITIES_TABLE: &str = "drop table if exists Activities";

pub const DROP_ATHLETES_TABLE: &str = "drop table if exists Athletes";

pub const CREATE_ATHLETES_TABLE: &str = "
create table Athletes (
    ID bigint not null primary key,
    FirstName varchar(255),
    LastName varchar(255),
    City varchar(255)
)
";

pub const CREATE_ACTIVITIES_TABLE: &str = "
create table Activities (
    ID bigint not null primary key,
    AthleteID bigint,
    Name varchar(255),
    Distance bigint,
    MovingTime int,
    ElapsedTime int,
    TotalElevationGain int,
    ElevHigh decimal(10, 3),
    ElevLow decimal(10, 3),
    Type varchar(255),
    StartDate timestamp,
    foreign key (AthleteID)
        references Athletes(ID)
        on delete cascade
)
";

pub const INSERT_ATHLETE: &str = "
insert into
    Athletes (ID, FirstName, LastName, City)
    values (?, ?, ?, ?)
";

pub const INSERT_ACTIVITY: &str = "
insert into
    Activities (
        ID, AthleteID, Name, Distance, MovingTime, ElapsedTime,
        TotalElevationGain, ElevHigh, ElevLow, Type, StartDate
    ) values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";
